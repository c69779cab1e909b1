//! # API Facade
//!
//! [`KudosApi`] is the single entry point for every UI: the terminal client,
//! the browser binding, and tests. It owns what a page owns:
//! - the [`CookieStore`] (persisted state)
//! - the pending comment input (page-local, never persisted)
//! - the notice slot (page-local, self-clearing)
//!
//! Each click method dispatches to a command, flashes the command's message
//! into the notice slot, and returns the [`CmdResult`]. [`KudosApi::render`]
//! produces the [`WidgetView`] to draw afterwards.
//!
//! ## Generic Over CookieJar and Clock
//!
//! - Terminal: `KudosApi<FileJar<SystemClock>, SystemClock>`
//! - Browser: `KudosApi<DocumentJar, SystemClock>`
//! - Testing: `KudosApi<MemoryJar<ManualClock>, ManualClock>`
//!
//! The API does no business logic and no I/O of its own.

use crate::clock::Clock;
use crate::commands;
use crate::config::KudosConfig;
use crate::model::{CookieKeys, Vote};
use crate::notice::{Notice, NoticeSlot};
use crate::store::{CookieJar, CookieStore};

pub struct KudosApi<J: CookieJar, C: Clock> {
    store: CookieStore<J, C>,
    keys: CookieKeys,
    input: String,
    notice: NoticeSlot,
}

impl<J: CookieJar, C: Clock> KudosApi<J, C> {
    pub fn new(jar: J, clock: C, config: &KudosConfig) -> Self {
        Self {
            store: CookieStore::with_policy(jar, clock, config.policy()),
            keys: config.keys(),
            input: String::new(),
            notice: NoticeSlot::new(config.notice_duration()),
        }
    }

    /// Seeds missing defaults. Call once before the first render.
    pub fn init(&mut self) -> CmdResult {
        commands::init::run(&self.store, &self.keys)
    }

    pub fn vote(&mut self, vote: Vote) -> CmdResult {
        let result = commands::vote::run(&self.store, &self.keys, vote);
        self.flash(&result);
        result
    }

    pub fn like(&mut self) -> CmdResult {
        self.vote(Vote::Like)
    }

    pub fn dislike(&mut self) -> CmdResult {
        self.vote(Vote::Dislike)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn submit_comment(&mut self) -> CmdResult {
        let result = commands::comment::submit(&self.store, &self.keys, &mut self.input);
        self.flash(&result);
        result
    }

    pub fn clear_input(&mut self) -> CmdResult {
        commands::comment::clear_input(&mut self.input)
    }

    pub fn reset(&mut self) -> CmdResult {
        let result = commands::reset::run(&self.store, &self.keys, &mut self.input);
        self.flash(&result);
        result
    }

    pub fn render(&self) -> commands::view::WidgetView {
        commands::view::run(&self.store, &self.keys, &self.input, self.notice())
    }

    /// The notice currently visible, if its time has not run out.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.current(self.store.clock().now())
    }

    /// Timer callback: clears notice `id` unless a newer one replaced it.
    pub fn expire_notice(&mut self, id: u64) -> bool {
        self.notice.expire(id)
    }

    pub fn notice_duration(&self) -> chrono::Duration {
        self.notice.duration()
    }

    pub fn store(&self) -> &CookieStore<J, C> {
        &self.store
    }

    pub fn keys(&self) -> &CookieKeys {
        &self.keys
    }

    fn flash(&mut self, result: &CmdResult) {
        if let Some(message) = result.notice() {
            let now = self.store.clock().now();
            self.notice.show(message.clone(), now);
        }
    }
}

pub use crate::commands::view::{ButtonView, WidgetView};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Outcome};
