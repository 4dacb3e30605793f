//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`] (messaging gateway), [`Handler`], message and user types,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and photo-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, MenuButton, Message, MessageKind, ToCoreMessage, ToCoreUser,
    User,
};
