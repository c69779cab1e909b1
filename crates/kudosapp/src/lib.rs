//! # Kudos Architecture
//!
//! Kudos is a **UI-agnostic feedback widget**: a like/dislike pair with
//! counters, a one-comment-per-visitor comment box, and a reset that puts
//! everything back. All state lives in cookies, so it survives reloads and
//! is private to one visitor.
//!
//! The library owns the behavior. The terminal client (`kudos` binary) and
//! the browser binding (`web`, behind the `wasm` feature) only draw it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI (kudos CLI, web.rs)                                     │
//! │  - Turns clicks into API calls, draws the WidgetView        │
//! │  - Owns real timers and terminal/DOM I/O                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per click                                     │
//! │  - Holds the comment input and the notice slot              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Guards and state transitions                             │
//! │  - Returns CmdResult (Outcome + messages)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CookieStore: typed get/set/erase over a cookie jar       │
//! │  - CookieJar trait: MemoryJar, FileJar, DocumentJar         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cookies
//!
//! Five cookies, all sharing a configurable prefix (`lab6_` by default):
//!
//! | Name | Content |
//! |------|---------|
//! | `<prefix>likes` | decimal like count |
//! | `<prefix>dislikes` | decimal dislike count |
//! | `<prefix>vote` | `like` or `dislike` once the visitor voted |
//! | `<prefix>commented` | `true` once the visitor commented |
//! | `<prefix>comments` | JSON array of comment strings |
//!
//! Values are percent-encoded the way `encodeURIComponent` does it, so a jar
//! written by the browser reads the same in the terminal and vice versa.
//!
//! ## No I/O in the Core
//!
//! Commands and the API never print, never sleep and never read the system
//! time directly: time comes from a [`clock::Clock`], storage from a
//! [`store::CookieJar`]. Swapping both for their in-memory versions makes
//! every behavior testable without a browser or a filesystem.

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod notice;
pub mod store;
#[cfg(feature = "wasm")]
pub mod web;
