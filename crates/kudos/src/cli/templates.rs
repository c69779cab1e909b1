//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files and embedded here with `include_str!`.
//!
//! Conventions:
//! - Styles are applied with the `style` filter and a semantic name. When a
//!   style depends on state, the renderer computes the name and passes it in
//!   (`like.style`), so templates do not branch on presentation.
//! - Block tags sit at line ends, so every line break in the output is one
//!   visible in the template.
//! - The trailing newline is dropped; callers print with `println!`.

pub const WIDGET_TEMPLATE: &str = include_str!("templates/widget.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
