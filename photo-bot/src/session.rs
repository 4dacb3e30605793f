//! Per-chat session store. The only place cross-message state lives.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use image_transform::Palette;
use tracing::debug;

use crate::error::WorkflowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingPalette,
    ReadyForAction,
}

/// One uploaded photo and the palette chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Gateway file reference of the photo; set once.
    pub photo_ref: String,
    /// Unset until the user sends text; never changed afterwards.
    pub palette: Option<Palette>,
    pub state: SessionState,
}

struct Entry {
    session: Session,
    last_activity: Instant,
}

/// Sessions keyed by chat id. Entries idle longer than `ttl` are dropped; `None` keeps them forever.
pub struct SessionStore {
    sessions: HashMap<i64, Entry>,
    ttl: Option<Duration>,
}

impl SessionStore {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        self.ttl
            .is_some_and(|ttl| now.duration_since(entry.last_activity) > ttl)
    }

    /// Inserts a fresh session for `chat_id`, replacing any previous one.
    pub fn create(&mut self, chat_id: i64, photo_ref: impl Into<String>) {
        let session = Session {
            photo_ref: photo_ref.into(),
            palette: None,
            state: SessionState::AwaitingPalette,
        };
        self.sessions.insert(
            chat_id,
            Entry {
                session,
                last_activity: Instant::now(),
            },
        );
    }

    /// Records `text` verbatim as the palette and marks the session ready.
    pub fn set_palette(&mut self, chat_id: i64, text: &str) -> Result<(), WorkflowError> {
        self.live_entry(chat_id)?;
        let palette = Palette::new(text)?;
        if let Some(entry) = self.sessions.get_mut(&chat_id) {
            entry.session.palette = Some(palette);
            entry.session.state = SessionState::ReadyForAction;
            entry.last_activity = Instant::now();
        }
        Ok(())
    }

    /// Snapshot of the session for `chat_id`.
    pub fn get(&mut self, chat_id: i64) -> Result<Session, WorkflowError> {
        let entry = self.live_entry(chat_id)?;
        entry.last_activity = Instant::now();
        Ok(entry.session.clone())
    }

    /// Removes every expired session; returns how many were removed.
    pub fn evict_expired(&mut self) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.duration_since(entry.last_activity) <= ttl);
        let evicted = before - self.sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = self.sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Entry for `chat_id`, dropping it first if it has expired.
    fn live_entry(&mut self, chat_id: i64) -> Result<&mut Entry, WorkflowError> {
        let expired = match self.sessions.get(&chat_id) {
            Some(entry) => self.is_expired(entry, Instant::now()),
            None => return Err(WorkflowError::SessionNotFound(chat_id)),
        };
        if expired {
            self.sessions.remove(&chat_id);
            debug!(chat_id, "Session expired");
            return Err(WorkflowError::SessionNotFound(chat_id));
        }
        self.sessions
            .get_mut(&chat_id)
            .ok_or(WorkflowError::SessionNotFound(chat_id))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(None)
    }
}
