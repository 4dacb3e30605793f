//! # Photo transform bot
//!
//! A user sends a photo, then a character palette, then picks an action from an inline menu:
//! ASCII art, pixelation, color inversion, mirroring, heat-map or a sticker canvas (plus a few
//! non-image extras). Wires the conversation state machine and transform dispatcher into a
//! handler chain and runs it over the Telegram gateway from dbot-telegram.

pub mod action;
pub mod cli;
pub mod components;
pub mod config;
pub mod conversation;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod runner;
pub mod session;

pub use cli::{load_config, Cli, Commands};

pub use action::{action_menu, Action, ImageAction, UtilityAction};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, WorkflowConfig};
pub use conversation::{Conversation, ConversationState, InboundEvent, Step};
pub use dispatcher::{Payload, TransformDispatcher, COIN_SIDES, COMPLIMENTS, JOKES, STICKER_FILENAME};
pub use error::WorkflowError;
pub use handlers::{LoggingHandler, PhotoWorkflowHandler};
pub use runner::run_bot;
pub use session::{Session, SessionState, SessionStore};
