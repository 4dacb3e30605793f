//! Transform parameters used by the dispatcher.

use anyhow::Result;
use image_transform::DEFAULT_PALETTE;
use std::env;
use std::time::Duration;

use super::env_parse;

/// Widest ASCII grid whose single row still fits in one message.
const MAX_ASCII_WIDTH: u32 = 1998;

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// ASCII_WIDTH: columns of the ASCII rendering
    pub ascii_width: u32,
    /// PIXEL_BLOCK_SIZE: edge of one pixelation block
    pub pixel_block_size: u32,
    /// STICKER_SIZE: edge of the square sticker canvas
    pub sticker_size: u32,
    /// DEFAULT_PALETTE: palette for a session that never set one, also shown as example
    pub default_palette: String,
    /// JPEG_QUALITY: 1..=100
    pub jpeg_quality: u8,
    /// SESSION_TTL_SECS: idle seconds before a session is dropped; 0 keeps sessions forever
    pub session_ttl_secs: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            ascii_width: 40,
            pixel_block_size: 20,
            sticker_size: 512,
            default_palette: DEFAULT_PALETTE.to_string(),
            jpeg_quality: 75,
            session_ttl_secs: 86_400,
        }
    }
}

impl WorkflowConfig {
    pub fn from_env() -> Result<Self> {
        let d = Self::default();
        Ok(Self {
            ascii_width: env_parse("ASCII_WIDTH", d.ascii_width)?,
            pixel_block_size: env_parse("PIXEL_BLOCK_SIZE", d.pixel_block_size)?,
            sticker_size: env_parse("STICKER_SIZE", d.sticker_size)?,
            default_palette: env::var("DEFAULT_PALETTE").unwrap_or(d.default_palette),
            jpeg_quality: env_parse("JPEG_QUALITY", d.jpeg_quality)?,
            session_ttl_secs: env_parse("SESSION_TTL_SECS", d.session_ttl_secs)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ASCII_WIDTH).contains(&self.ascii_width) {
            anyhow::bail!(
                "ASCII_WIDTH must be between 1 and {}, got {}",
                MAX_ASCII_WIDTH,
                self.ascii_width
            );
        }
        if self.pixel_block_size == 0 {
            anyhow::bail!("PIXEL_BLOCK_SIZE must be greater than 0");
        }
        if self.sticker_size == 0 {
            anyhow::bail!("STICKER_SIZE must be greater than 0");
        }
        if self.default_palette.is_empty() {
            anyhow::bail!("DEFAULT_PALETTE must not be empty");
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            anyhow::bail!("JPEG_QUALITY must be between 1 and 100, got {}", self.jpeg_quality);
        }
        Ok(())
    }

    /// Session idle timeout; `None` when SESSION_TTL_SECS is 0.
    pub fn session_ttl(&self) -> Option<Duration> {
        (self.session_ttl_secs > 0).then(|| Duration::from_secs(self.session_ttl_secs))
    }
}
