//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: if chat.is_private() { "private" } else { "group" }.to_string(),
    }
}

fn unknown_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Photos and text are converted;
/// anything else (stickers, voice, service messages) yields `None`.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    /// File id of the largest photo size, if the message carries a photo.
    fn largest_photo_id(&self) -> Option<String> {
        self.0
            .photo()
            .and_then(|sizes| sizes.last())
            .map(|p| p.file.id.0.clone())
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let (kind, content) = if let Some(file_id) = self.largest_photo_id() {
            (
                MessageKind::Photo { file_id },
                self.0.caption().unwrap_or("").to_string(),
            )
        } else {
            (MessageKind::Text, self.0.text()?.to_string())
        };

        Some(Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(unknown_user),
            chat: core_chat(&self.0.chat),
            content,
            kind,
            created_at: chrono::Utc::now(),
        })
    }
}

/// Wraps an inline-keyboard callback query; the callback data becomes the message content.
/// Queries without data or without an originating message yield `None`.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let data = self.0.data.as_ref()?;
        let origin = self.0.message.as_ref()?;

        Some(Message {
            id: format!("cb:{}", origin.id()),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            chat: core_chat(origin.chat()),
            content: data.clone(),
            kind: MessageKind::Callback,
            created_at: chrono::Utc::now(),
        })
    }
}
