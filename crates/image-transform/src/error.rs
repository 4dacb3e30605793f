use thiserror::Error;

/// Errors from decoding, transforming or encoding an image.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Unsupported mirror direction: {0}")]
    UnsupportedDirection(String),

    #[error("Palette must contain at least one character")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, TransformError>;
