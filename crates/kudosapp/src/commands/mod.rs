//! # Command Layer
//!
//! One module per click. Each command reads what it needs through the
//! [`CookieStore`](crate::store::CookieStore), checks its guards, writes the
//! new state back, and returns a [`CmdResult`]: a typed [`Outcome`] plus the
//! user-facing messages the UI turns into a transient notice.
//!
//! Commands never fail. Unreadable cookies fall back to defaults and rejected
//! writes are swallowed by the store, so the worst case is a click that does
//! not stick.

use crate::model::{Vote, VoteMarker};
use serde::Serialize;

pub mod comment;
pub mod helpers;
pub mod init;
pub mod reset;
pub mod view;
pub mod vote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command did, for callers that branch on more than the message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Startup finished; lists the cookies that had to be seeded.
    Initialized { seeded: Vec<String> },
    Voted { vote: Vote },
    AlreadyVoted { marker: VoteMarker },
    Commented { text: String },
    EmptyComment,
    AlreadyCommented,
    Reset { previous: VoteMarker },
    InputCleared,
}

impl Outcome {
    /// True when persisted state was changed.
    pub fn mutated(&self) -> bool {
        match self {
            Outcome::Initialized { seeded } => !seeded.is_empty(),
            Outcome::Voted { .. } | Outcome::Commented { .. } | Outcome::Reset { .. } => true,
            Outcome::AlreadyVoted { .. }
            | Outcome::EmptyComment
            | Outcome::AlreadyCommented
            | Outcome::InputCleared => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    /// The message to flash, if the command produced one.
    pub fn notice(&self) -> Option<&CmdMessage> {
        self.messages.last()
    }
}
