//! # dbot-telegram
//!
//! Telegram gateway layer: adapters, [`dbot_core::Bot`] implementation, dispatcher runner.
//! Handles only Telegram connectivity and sequential handler-chain execution; no workflow or image logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{code_block_markdown, escape_code_block, TelegramBotAdapter};
pub use runner::{run_dispatcher, spawn_worker};
