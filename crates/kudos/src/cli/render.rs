//! # Rendering
//!
//! Turns library values into what the CLI prints.
//!
//! - Text modes feed a `serde_json::Value` built from the [`WidgetView`] into
//!   the embedded templates. Style names that depend on state are computed
//!   here, not in the template.
//! - JSON mode serializes the library types directly.

use super::setup::OutputMode;
use super::styles::{names, Theme, KUDOS_THEME};
use super::templates::{CONFIG_TEMPLATE, WIDGET_TEMPLATE};
use kudosapp::api::{ButtonView, CmdMessage, CmdResult, WidgetView};
use kudosapp::config::KudosConfig;
use kudosapp::error::{KudosError, Result};
use minijinja::{Environment, Value};
use serde_json::json;
use std::path::Path;

const WIDGET: &str = "widget.jinja";
const CONFIG: &str = "config.jinja";

pub struct Renderer {
    mode: OutputMode,
    env: Environment<'static>,
}

fn template_error(e: minijinja::Error) -> KudosError {
    KudosError::Api(format!("template error: {}", e))
}

impl Renderer {
    /// Styled output only when `mode` is `term`, `--no-color` is off and
    /// stdout is a terminal.
    pub fn new(mode: OutputMode, use_color: bool) -> Result<Self> {
        let theme = if mode == OutputMode::Term && use_color {
            Some(KUDOS_THEME.clone())
        } else {
            None
        };
        Self::with_theme(mode, theme)
    }

    fn with_theme(mode: OutputMode, theme: Option<Theme>) -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            match &theme {
                Some(theme) => theme.apply(&name, &text),
                None => text,
            }
        });
        env.add_template(WIDGET, WIDGET_TEMPLATE)
            .map_err(template_error)?;
        env.add_template(CONFIG, CONFIG_TEMPLATE)
            .map_err(template_error)?;
        Ok(Self { mode, env })
    }

    fn render(&self, name: &str, data: serde_json::Value) -> Result<String> {
        let template = self.env.get_template(name).map_err(template_error)?;
        template.render(data).map_err(template_error)
    }

    pub fn view(&self, view: &WidgetView) -> Result<String> {
        match self.mode {
            OutputMode::Json => Ok(serde_json::to_string_pretty(view)?),
            OutputMode::Term | OutputMode::Plain => self.render(WIDGET, widget_value(view)),
        }
    }

    /// Output after a click: the widget as it now stands, topped by the
    /// click's own message. A click without a message keeps whatever notice
    /// the view still shows.
    pub fn click(&self, result: &CmdResult, view: &WidgetView) -> Result<String> {
        match self.mode {
            OutputMode::Json => Ok(serde_json::to_string_pretty(&json!({
                "result": result,
                "view": view,
            }))?),
            OutputMode::Term | OutputMode::Plain => {
                let mut data = widget_value(view);
                if let Some(message) = result.notice() {
                    data["notice"] = notice_value(message);
                }
                self.render(WIDGET, data)
            }
        }
    }

    pub fn config(&self, data_dir: &Path, config: &KudosConfig) -> Result<String> {
        let data = json!({
            "data_dir": data_dir.display().to_string(),
            "config": config,
        });
        match self.mode {
            OutputMode::Json => Ok(serde_json::to_string_pretty(&data)?),
            OutputMode::Term | OutputMode::Plain => self.render(CONFIG, data),
        }
    }
}

fn button_style(button: ButtonView) -> &'static str {
    if button.picked {
        names::PICKED
    } else if button.disabled {
        names::DISABLED
    } else {
        names::BUTTON
    }
}

fn button_value(button: ButtonView) -> serde_json::Value {
    json!({
        "picked": button.picked,
        "disabled": button.disabled,
        "style": button_style(button),
    })
}

fn notice_value(message: &CmdMessage) -> serde_json::Value {
    json!({
        "content": message.content,
        "level": message.level,
    })
}

pub fn widget_value(view: &WidgetView) -> serde_json::Value {
    json!({
        "notice": view.notice.as_ref().map(|n| notice_value(&n.message)),
        "likes": view.likes,
        "dislikes": view.dislikes,
        "like": button_value(view.like_button),
        "dislike": button_value(view.dislike_button),
        "voted": view.vote.is_set(),
        "comments": view.comments,
        "input": view.input,
    })
}
