//! Recording implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Every outbound call is appended to a shared log; `fetch_file` serves bytes registered with
//! [`MockBot::with_file`] so the workflow runs without hitting Telegram.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, MenuButton, Message, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)] // not every test file inspects every variant
pub enum Sent {
    Text { chat_id: i64, text: String },
    CodeBlock { chat_id: i64, text: String },
    Menu { chat_id: i64, text: String, rows: Vec<Vec<MenuButton>> },
    Photo { chat_id: i64, bytes: Vec<u8> },
    Document { chat_id: i64, bytes: Vec<u8>, filename: String },
}

#[derive(Default)]
pub struct MockBot {
    files: HashMap<String, Vec<u8>>,
    sent: Mutex<Vec<Sent>>,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers bytes returned by `fetch_file(file_ref)`.
    pub fn with_file(mut self, file_ref: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(file_ref.to_string(), bytes);
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// The last recorded call, if any.
    pub fn last(&self) -> Option<Sent> {
        self.sent.lock().unwrap().last().cloned()
    }

    fn record(&self, entry: Sent) {
        self.sent.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_code_block(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::CodeBlock {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, rows: &[Vec<MenuButton>]) -> Result<()> {
        self.record(Sent::Menu {
            chat_id: chat.id,
            text: text.to_string(),
            rows: rows.to_vec(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, jpeg: Vec<u8>) -> Result<()> {
        self.record(Sent::Photo {
            chat_id: chat.id,
            bytes: jpeg,
        });
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, bytes: Vec<u8>, filename: &str) -> Result<()> {
        self.record(Sent::Document {
            chat_id: chat.id,
            bytes,
            filename: filename.to_string(),
        });
        Ok(())
    }

    async fn fetch_file(&self, file_ref: &str) -> Result<Vec<u8>> {
        self.files
            .get(file_ref)
            .cloned()
            .ok_or_else(|| DbotError::Download(format!("unknown file {}", file_ref)))
    }
}
