//! # Transient Notices
//!
//! Every click answers with a short status line that disappears on its own.
//! There is exactly one slot: a new notice replaces the current one and
//! restarts its countdown, there is no queue.
//!
//! The slot is deadline based. Callers ask for [`NoticeSlot::current`] with
//! the time from their [`Clock`](crate::clock::Clock); past the deadline the
//! slot reads as empty. UIs that need a real timer (the browser binding) arm
//! one per notice and call [`NoticeSlot::expire`] with the notice id when it
//! fires; a timer left over from a preempted notice carries a stale id and
//! does nothing.

use crate::commands::CmdMessage;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const DEFAULT_NOTICE_MS: i64 = 1400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub message: CmdMessage,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NoticeSlot {
    duration: Duration,
    current: Option<Notice>,
    next_id: u64,
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new(Duration::milliseconds(DEFAULT_NOTICE_MS))
    }
}

impl NoticeSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
            next_id: 1,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Replaces whatever is showing and starts a fresh countdown.
    pub fn show(&mut self, message: CmdMessage, now: DateTime<Utc>) -> &Notice {
        let id = self.next_id;
        self.next_id += 1;
        self.current.insert(Notice {
            id,
            message,
            expires_at: now
                .checked_add_signed(self.duration)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        })
    }

    pub fn current(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.current.as_ref().filter(|n| now < n.expires_at)
    }

    /// Clears the slot if it still holds notice `id`. Returns whether it did.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

}
