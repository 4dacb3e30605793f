//! Photo workflow handler: drives the conversation and replies through the gateway.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, Handler, HandlerResponse, Message, MessageKind, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::action::action_menu;
use crate::config::WorkflowConfig;
use crate::conversation::{Conversation, InboundEvent, Step};
use crate::dispatcher::TransformDispatcher;
use crate::error::WorkflowError;

// --- User-facing messages ---
pub const MSG_WELCOME: &str = "Send me a picture and I'll offer you some options!";
pub const MSG_MENU: &str = "Thanks! Now choose what you would like to do with the image.";

const WELCOME_COMMANDS: &[&str] = &["/start", "/help"];

/// `/start` or `/help`, optionally addressed as `/start@botname`.
fn is_welcome_command(message: &Message) -> bool {
    if message.kind != MessageKind::Text {
        return false;
    }
    let command = message
        .content
        .split_whitespace()
        .next()
        .and_then(|word| word.split('@').next())
        .unwrap_or("");
    WELCOME_COMMANDS.contains(&command)
}

fn palette_prompt(example: &str) -> String {
    format!(
        "I have your photo! Please send the set of characters to use for ASCII art (for example '{}').",
        example
    )
}

/// Runs the upload → palette → action workflow for every chat.
pub struct PhotoWorkflowHandler {
    bot: Arc<dyn CoreBot>,
    conversation: Arc<Conversation>,
    dispatcher: TransformDispatcher,
    palette_prompt: String,
}

impl PhotoWorkflowHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        conversation: Arc<Conversation>,
        config: WorkflowConfig,
    ) -> Self {
        let palette_prompt = palette_prompt(&config.default_palette);
        Self {
            dispatcher: TransformDispatcher::new(bot.clone(), config),
            bot,
            conversation,
            palette_prompt,
        }
    }

    /// Sends the user-facing text for `err` instead of a result.
    async fn report(&self, chat: &Chat, err: WorkflowError) -> Result<HandlerResponse> {
        warn!(chat_id = chat.id, error = %err, "Workflow error");
        let text = err.user_message();
        self.bot.send_message(chat, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for PhotoWorkflowHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, kind = message.kind_name()))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if is_welcome_command(message) {
            self.bot.reply_to(message, MSG_WELCOME).await?;
            return Ok(HandlerResponse::Reply(MSG_WELCOME.to_string()));
        }

        let chat = &message.chat;
        let step = match self.conversation.apply(&InboundEvent::from_message(message)) {
            Ok(step) => step,
            Err(e) => return self.report(chat, e).await,
        };

        match step {
            Step::AwaitPalette => {
                self.bot.reply_to(message, &self.palette_prompt).await?;
                Ok(HandlerResponse::Reply(self.palette_prompt.clone()))
            }
            Step::ShowMenu => {
                self.bot.send_menu(chat, MSG_MENU, &action_menu()).await?;
                Ok(HandlerResponse::Reply(MSG_MENU.to_string()))
            }
            Step::Ignored => Ok(HandlerResponse::Ignore),
            Step::Dispatch { action, session } => {
                info!(chat_id = chat.id, action = %action.token(), "Dispatching action");
                match self.dispatcher.dispatch(chat.id, action, session.as_ref()).await {
                    Ok(payload) => {
                        self.dispatcher.deliver(chat, payload).await?;
                        Ok(HandlerResponse::Stop)
                    }
                    Err(e) => self.report(chat, e).await,
                }
            }
        }
    }
}
