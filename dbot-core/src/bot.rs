//! Messaging gateway abstraction.
//!
//! [`Bot`] is transport-agnostic; `dbot-telegram` implements it via teloxide and tests
//! substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, MenuButton, Message};
use async_trait::async_trait;

/// Outbound side of the messaging gateway: text, formatted text, menus, media, and the
/// pull of raw file bytes for a photo reference.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;

    /// Sends `text` rendered as a preformatted code block. Escaping is the transport's job.
    async fn send_code_block(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends `text` with an inline menu; each inner vec is one row of buttons.
    async fn send_menu(&self, chat: &Chat, text: &str, rows: &[Vec<MenuButton>]) -> Result<()>;

    /// Sends JPEG bytes as a photo.
    async fn send_photo(&self, chat: &Chat, jpeg: Vec<u8>) -> Result<()>;

    /// Sends bytes as a file attachment with the given file name.
    async fn send_document(&self, chat: &Chat, bytes: Vec<u8>, filename: &str) -> Result<()>;

    /// Resolves an opaque file reference (e.g. Telegram `file_id`) and downloads its bytes.
    async fn fetch_file(&self, file_ref: &str) -> Result<Vec<u8>>;
}
