//! Styles for the kudos CLI.
//!
//! Templates refer to styles by semantic name (`count`, `picked`, `comment`)
//! and never to colours. A theme maps those names to `console::Style`s; there
//! is one theme for light terminals and one for dark ones, picked once per
//! process through `dark-light`.
//!
//! Notice lines are styled by message level, so the level names
//! (`success`, `warning`) are style names too.
//!
//! An unknown style name renders the text unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const TITLE: &str = "title";
    pub const COUNT: &str = "count";
    pub const BUTTON: &str = "button";
    pub const PICKED: &str = "picked";
    pub const DISABLED: &str = "disabled";
    pub const COMMENT: &str = "comment";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

#[derive(Clone, Debug, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

/// The theme matching the terminal background, resolved on first use.
pub static KUDOS_THEME: Lazy<Theme> = Lazy::new(|| match dark_light::detect() {
    dark_light::Mode::Light => build_light_theme(),
    dark_light::Mode::Dark => build_dark_theme(),
});

fn build_light_theme() -> Theme {
    let faint = Style::new().color256(250);
    let accent = Style::new().color256(136);

    Theme::default()
        .add(names::MUTED, Style::new().color256(243))
        .add(names::FAINT, faint.clone())
        .add(names::TITLE, Style::new().black().bold())
        .add(names::COUNT, accent.bold())
        .add(names::BUTTON, Style::new().black())
        .add(names::PICKED, Style::new().black().on_color256(222).bold())
        .add(names::DISABLED, faint)
        .add(names::COMMENT, Style::new().black())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
}

fn build_dark_theme() -> Theme {
    let faint = Style::new().color256(242);
    let accent = Style::new().color256(220);

    Theme::default()
        .add(names::MUTED, Style::new().color256(249))
        .add(names::FAINT, faint.clone())
        .add(names::TITLE, Style::new().white().bold())
        .add(names::COUNT, accent.bold())
        .add(names::BUTTON, Style::new().white())
        .add(names::PICKED, Style::new().black().on_color256(178).bold())
        .add(names::DISABLED, faint)
        .add(names::COMMENT, Style::new().white())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
}
