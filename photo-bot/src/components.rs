//! Component factory: builds the teloxide bot, the gateway adapter and the handler chain from config.

use dbot_core::Bot as CoreBot;
use dbot_telegram::TelegramBotAdapter;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, instrument};

use super::config::{BotConfig, WorkflowConfig};
use super::conversation::Conversation;
use super::handlers::{LoggingHandler, PhotoWorkflowHandler};

/// Dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot_adapter: Arc<dyn CoreBot>,
    pub conversation: Arc<Conversation>,
}

/// Builds BotComponents: teloxide Bot (with optional API URL), adapter, and the conversation state.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token());
        if let Some(url_str) = config.telegram_api_url() {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let conversation = Arc::new(Conversation::new(config.workflow().session_ttl()));

    BotComponents {
        teloxide_bot,
        bot_adapter,
        conversation,
    }
}

/// Builds the handler chain (logging → photo workflow) over any gateway.
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    conversation: Arc<Conversation>,
    config: &WorkflowConfig,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(PhotoWorkflowHandler::new(
            bot,
            conversation,
            config.clone(),
        )))
}
