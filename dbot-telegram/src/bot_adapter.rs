//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, MenuButton, Message, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, FileId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode,
};
use tracing::{debug, instrument};

/// Escapes text for a MarkdownV2 pre block, where only `` ` `` and `\` are special.
pub fn escape_code_block(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '`' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wraps `text` in a MarkdownV2 pre block.
pub fn code_block_markdown(text: &str) -> String {
    format!("```\n{}\n```", escape_code_block(text))
}

fn keyboard(rows: &[Vec<MenuButton>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_code_block(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), code_block_markdown(text))
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, rows: &[Vec<MenuButton>]) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard(rows))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, jpeg: Vec<u8>) -> Result<()> {
        self.bot
            .send_photo(ChatId(chat.id), InputFile::memory(jpeg).file_name("photo.jpg"))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, bytes: Vec<u8>, filename: &str) -> Result<()> {
        self.bot
            .send_document(
                ChatId(chat.id),
                InputFile::memory(bytes).file_name(filename.to_string()),
            )
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_file(&self, file_ref: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(file_ref.to_string()))
            .await
            .map_err(|e| DbotError::Download(e.to_string()))?;

        let mut bytes = Vec::new();
        self.bot
            .download_file(&file.path, &mut bytes)
            .await
            .map_err(|e| DbotError::Download(e.to_string()))?;

        debug!(path = %file.path, size = bytes.len(), "File downloaded");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_code_block() {
        assert_eq!(escape_code_block("@%#*+=-:. "), "@%#*+=-:. ");
        assert_eq!(escape_code_block("a`b\\c"), "a\\`b\\\\c");
    }

    #[test]
    fn test_code_block_markdown_wraps() {
        assert_eq!(code_block_markdown("ab\ncd\n"), "```\nab\ncd\n\n```");
    }

    #[test]
    fn test_keyboard_layout() {
        let rows = vec![
            vec![MenuButton::new("A", "a"), MenuButton::new("B", "b")],
            vec![MenuButton::new("C", "c")],
        ];
        let markup = keyboard(&rows);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1][0].text, "C");
    }
}
