//! # image-transform
//!
//! Pure, stateless photo transforms used by the bot: ASCII-art rendering, pixelation, color
//! inversion, mirroring, luminance heat-map and the square sticker canvas, plus byte-stream
//! decoding and JPEG/PNG encoding. Nothing here touches shared state or the network.

pub mod ascii;
pub mod codec;
pub mod color;
pub mod error;
pub mod luma;
pub mod mirror;
pub mod pixelate;
pub mod sticker;

pub use ascii::{render_ascii, Palette, DEFAULT_PALETTE, MAX_MESSAGE_CHARS};
pub use codec::{decode, encode_jpeg, encode_png};
pub use color::{heatmap, invert};
pub use error::{Result, TransformError};
pub use luma::grayscale;
pub use mirror::{mirror, Direction};
pub use pixelate::pixelate;
pub use sticker::sticker_fit;
