//! Workflow errors. Every variant is recoverable and has a user-facing text.

use image_transform::TransformError;
use thiserror::Error;

// --- User-facing messages ---
const MSG_SESSION_NOT_FOUND: &str = "Please send me a photo first.";
const MSG_INVALID_PALETTE: &str =
    "The character set can't be empty. Please send at least one character.";
const MSG_DOWNLOAD_FAILED: &str = "Sorry, I couldn't download your photo. Please try again.";
const MSG_DECODE_FAILED: &str = "Sorry, I couldn't read that image. Please send another photo.";
const MSG_PROCESSING_FAILED: &str = "Sorry, something went wrong while processing your image.";

/// Failures of the upload → palette → action workflow.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("No session for chat {0}")]
    SessionNotFound(i64),

    #[error("Palette is empty")]
    InvalidPalette,

    #[error("Unsupported mirror direction: {0}")]
    UnsupportedDirection(String),

    #[error("Failed to download photo: {0}")]
    DownloadFailed(String),

    #[error("Failed to decode photo: {0}")]
    DecodeFailed(String),

    #[error("Failed to encode result: {0}")]
    EncodingFailed(String),

    #[error("Transform task failed: {0}")]
    TransformFailed(String),
}

impl WorkflowError {
    /// Text sent to the user in place of the requested result.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::SessionNotFound(_) => MSG_SESSION_NOT_FOUND.to_string(),
            WorkflowError::InvalidPalette => MSG_INVALID_PALETTE.to_string(),
            WorkflowError::UnsupportedDirection(direction) => format!(
                "Sorry, I can't mirror an image '{}'. Try horizontal or vertical.",
                direction
            ),
            WorkflowError::DownloadFailed(_) => MSG_DOWNLOAD_FAILED.to_string(),
            WorkflowError::DecodeFailed(_) => MSG_DECODE_FAILED.to_string(),
            WorkflowError::EncodingFailed(_) | WorkflowError::TransformFailed(_) => {
                MSG_PROCESSING_FAILED.to_string()
            }
        }
    }
}

impl From<TransformError> for WorkflowError {
    fn from(e: TransformError) -> Self {
        match e {
            TransformError::Decode(msg) => WorkflowError::DecodeFailed(msg),
            TransformError::Encode(msg) => WorkflowError::EncodingFailed(msg),
            TransformError::UnsupportedDirection(direction) => {
                WorkflowError::UnsupportedDirection(direction)
            }
            TransformError::EmptyPalette => WorkflowError::InvalidPalette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_error_mapping() {
        assert!(matches!(
            WorkflowError::from(TransformError::Decode("bad".into())),
            WorkflowError::DecodeFailed(_)
        ));
        assert!(matches!(
            WorkflowError::from(TransformError::Encode("bad".into())),
            WorkflowError::EncodingFailed(_)
        ));
        assert!(matches!(
            WorkflowError::from(TransformError::EmptyPalette),
            WorkflowError::InvalidPalette
        ));
    }

    #[test]
    fn test_user_message_names_direction() {
        let err = WorkflowError::UnsupportedDirection("diagonal".to_string());
        assert!(err.user_message().contains("'diagonal'"));
        assert_eq!(
            WorkflowError::SessionNotFound(7).user_message(),
            MSG_SESSION_NOT_FOUND
        );
    }
}
