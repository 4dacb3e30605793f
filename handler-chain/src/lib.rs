//! # Handler chain
//!
//! Runs an ordered list of [`Handler`]s for each inbound message in three phases:
//! every `before` in order (a `false` vetoes the message), then `handle` until one returns
//! `Stop` or `Reply`, then every `after` in reverse order with the final response.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers for one bot. Cheap to clone; handlers are shared.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

fn ends_handle_phase(response: &HandlerResponse) -> bool {
    matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_))
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; handlers run in insertion order.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// `true` when every handler accepted the message.
    async fn run_before(&self, message: &Message) -> Result<bool> {
        for (index, h) in self.handlers.iter().enumerate() {
            if !h.before(message).await? {
                info!(
                    chat_id = message.chat.id,
                    handler = index,
                    "Message vetoed in before()"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// First `Stop`/`Reply`, or `Continue` when every handler passed.
    async fn run_handle(&self, message: &Message) -> Result<HandlerResponse> {
        for (index, h) in self.handlers.iter().enumerate() {
            let response = h.handle(message).await?;
            debug!(
                chat_id = message.chat.id,
                handler = index,
                response = ?response,
                "handle() done"
            );
            if ends_handle_phase(&response) {
                return Ok(response);
            }
        }
        Ok(HandlerResponse::Continue)
    }

    async fn run_after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        for h in self.handlers.iter().rev() {
            h.after(message, response).await?;
        }
        Ok(())
    }

    /// Runs the three phases for `message` and returns the final response. A veto in
    /// `before` returns `Stop` and skips the other phases. Handler errors abort the chain.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, kind = message.kind_name()))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.run_before(message).await? {
            return Ok(HandlerResponse::Stop);
        }

        let response = self.run_handle(message).await?;
        self.run_after(message, &response).await?;

        debug!(
            chat_id = message.chat.id,
            message_id = %message.id,
            response = ?response,
            "Handler chain finished"
        );
        Ok(response)
    }
}
