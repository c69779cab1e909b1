//! # Kudos CLI
//!
//! The terminal face of the kudos widget. It plays the part a web page plays
//! for the browser build: it holds a cookie jar (a JSON file in the data
//! directory), turns each subcommand into one click, and draws the widget
//! afterwards.
//!
//! ## Workspace Structure
//!
//! - `crates/kudosapp/` — UI-agnostic library: cookie store, commands, API
//! - `crates/kudos/` — this binary, depends on `kudosapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/kudos/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + interactive session (commands.rs, session.rs) │
//! │  - minijinja templates + console styles (render.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/kudosapp/src/api.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! One-shot subcommands (`like`, `comment ...`) start a fresh "page" per
//! process, so the comment input never outlives the command. `kudos session`
//! keeps one page open and reads clicks from stdin, which is the only way to
//! see the input buffer and the notice timer behave as they do in a browser.
//!
//! ## Testing Approach
//!
//! - Parsing and rendering: unit tests next to the code, with colour off.
//! - The session loop: driven with in-memory readers over a `MemoryJar`.
//! - End to end: `tests/cli_e2e.rs` runs the binary against a temporary
//!   data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
