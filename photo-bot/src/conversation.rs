//! Conversation state machine: NoSession → AwaitingPalette → ReadyForAction.
//!
//! Owns the [`SessionStore`] behind a mutex that is held for one store operation and never
//! across an await point. Decides what the next step is for an inbound event; it does not talk
//! to the gateway.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use dbot_core::{Message, MessageKind};
use tracing::{debug, instrument};

use crate::action::Action;
use crate::error::WorkflowError;
use crate::session::{Session, SessionState, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    NoSession,
    AwaitingPalette,
    ReadyForAction,
}

/// Inbound event, keyed by chat id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    PhotoReceived { chat_id: i64, photo_ref: String },
    TextReceived { chat_id: i64, text: String },
    ActionSelected { chat_id: i64, token: String },
}

impl InboundEvent {
    /// Maps a core message to an event. Photo captions are dropped.
    pub fn from_message(message: &Message) -> Self {
        let chat_id = message.chat.id;
        match &message.kind {
            MessageKind::Photo { file_id } => InboundEvent::PhotoReceived {
                chat_id,
                photo_ref: file_id.clone(),
            },
            MessageKind::Text => InboundEvent::TextReceived {
                chat_id,
                text: message.content.clone(),
            },
            MessageKind::Callback => InboundEvent::ActionSelected {
                chat_id,
                token: message.content.clone(),
            },
        }
    }

    pub fn chat_id(&self) -> i64 {
        match self {
            InboundEvent::PhotoReceived { chat_id, .. }
            | InboundEvent::TextReceived { chat_id, .. }
            | InboundEvent::ActionSelected { chat_id, .. } => *chat_id,
        }
    }
}

/// What the caller should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Photo stored; ask for the palette.
    AwaitPalette,
    /// Palette stored; show the action menu.
    ShowMenu,
    /// Nothing to do (text after the palette, unknown token).
    Ignored,
    /// Run `action`. `session` is set only when the chat is ready for actions.
    Dispatch {
        action: Action,
        session: Option<Session>,
    },
}

pub struct Conversation {
    store: Mutex<SessionStore>,
}

impl Conversation {
    pub fn new(session_ttl: Option<Duration>) -> Self {
        Self {
            store: Mutex::new(SessionStore::new(session_ttl)),
        }
    }

    fn store(&self) -> MutexGuard<'_, SessionStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state for `chat_id`.
    pub fn state(&self, chat_id: i64) -> ConversationState {
        match self.store().get(chat_id) {
            Ok(session) => match session.state {
                SessionState::AwaitingPalette => ConversationState::AwaitingPalette,
                SessionState::ReadyForAction => ConversationState::ReadyForAction,
            },
            Err(_) => ConversationState::NoSession,
        }
    }

    /// Applies one event to the chat's session and returns the next step.
    ///
    /// Text without a session fails with [`WorkflowError::SessionNotFound`]; a `mirror_<dir>`
    /// token with an unknown direction fails with [`WorkflowError::UnsupportedDirection`]. Neither
    /// changes state.
    #[instrument(skip(self))]
    pub fn apply(&self, event: &InboundEvent) -> Result<Step, WorkflowError> {
        match event {
            InboundEvent::PhotoReceived { chat_id, photo_ref } => {
                let mut store = self.store();
                store.evict_expired();
                store.create(*chat_id, photo_ref.clone());
                debug!(chat_id, sessions = store.len(), "Session created");
                Ok(Step::AwaitPalette)
            }
            InboundEvent::TextReceived { chat_id, text } => {
                let mut store = self.store();
                match store.get(*chat_id)?.state {
                    SessionState::AwaitingPalette => {
                        store.set_palette(*chat_id, text)?;
                        Ok(Step::ShowMenu)
                    }
                    SessionState::ReadyForAction => Ok(Step::Ignored),
                }
            }
            InboundEvent::ActionSelected { chat_id, token } => {
                let Some(action) = Action::parse(token)? else {
                    debug!(chat_id, token = %token, "Unknown action token");
                    return Ok(Step::Ignored);
                };
                let session = self
                    .store()
                    .get(*chat_id)
                    .ok()
                    .filter(|s| s.state == SessionState::ReadyForAction);
                Ok(Step::Dispatch { action, session })
            }
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(None)
    }
}
