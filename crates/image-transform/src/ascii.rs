//! ASCII-art rendering.
//!
//! The image is reduced to luminance, resized to `width` columns and a row count corrected by
//! [`CHAR_ASPECT`] (glyphs are taller than wide), and every pixel is mapped onto a palette
//! character. Output is capped so it always fits in one [`MAX_MESSAGE_CHARS`] message.

use std::fmt;

use image::imageops::{self, FilterType};
use image::DynamicImage;

use crate::error::{Result, TransformError};
use crate::luma::grayscale;

/// Palette used when a conversation never supplied one.
pub const DEFAULT_PALETTE: &str = "@%#*+=-:. ";

/// Upper bound on the rendered text, line breaks included.
pub const MAX_MESSAGE_CHARS: usize = 4000;

/// Row correction: a terminal glyph is roughly 1 / 0.55 times taller than it is wide.
pub const CHAR_ASPECT: f64 = 0.55;

/// Ordered, non-empty character set; darker luminance maps to earlier characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<char>);

impl Palette {
    /// Builds a palette from text verbatim (duplicates and whitespace kept). Fails on empty text.
    pub fn new(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Err(TransformError::EmptyPalette);
        }
        Ok(Self(chars))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character for luminance `p`: index `floor(p * len / 256)`.
    #[inline]
    pub fn glyph(&self, p: u8) -> char {
        self.0[p as usize * self.0.len() / 256]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.chars().collect())
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Grid size for an image of `width × height` rendered at `target_width` columns.
/// Rows are `round(target_width * height / width * CHAR_ASPECT)`, at least 1.
pub fn ascii_dimensions(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    let ratio = height as f64 / width as f64;
    let rows = (target_width as f64 * ratio * CHAR_ASPECT).round() as u32;
    (target_width, rows.max(1))
}

/// Most rows that fit: `floor((MAX_MESSAGE_CHARS - (w + 1)) / (w + 1))`.
pub fn max_rows(target_width: u32) -> usize {
    let line = target_width as usize + 1;
    MAX_MESSAGE_CHARS.saturating_sub(line) / line
}

/// Renders `img` as ASCII art, one `\n`-terminated line of `target_width` characters per row.
/// Rows beyond [`max_rows`] are dropped.
pub fn render_ascii(img: &DynamicImage, target_width: u32, palette: &Palette) -> String {
    let (cols, rows) = ascii_dimensions(img.width(), img.height(), target_width);
    let gray = grayscale(img);
    let resized = imageops::resize(&gray, cols, rows, FilterType::CatmullRom);

    let kept_rows = (rows as usize).min(max_rows(target_width));
    let mut art = String::with_capacity(kept_rows * (cols as usize + 1));
    for row in resized.rows().take(kept_rows) {
        art.extend(row.map(|p| palette.glyph(p[0])));
        art.push('\n');
    }

    tracing::debug!(cols, rows, kept_rows, palette_len = palette.len(), "ascii rendered");
    art
}
