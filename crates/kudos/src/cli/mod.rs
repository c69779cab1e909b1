//! # CLI Behavior
//!
//! This is **one possible UI** for kudos. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `kudos` with no arguments is `kudos show`.
//!
//! ## Output Modes
//!
//! - `term` (default): styled when stdout is a terminal and `--no-color` is off
//! - `plain`: same layout, never styled
//! - `json`: the widget view (and, for clicks, the command result) as JSON
//!
//! ## Module Structure
//!
//! - `commands`: dispatch, logging setup, one handler per subcommand
//! - `session`: the interactive stdin loop
//! - `render`: view → text or JSON
//! - `setup`: argument parsing via clap
//! - `styles`: terminal style themes
//! - `templates`: embedded minijinja templates

mod commands;
mod render;
mod session;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
