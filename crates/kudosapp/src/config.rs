//! # Configuration
//!
//! Configuration is managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `KUDOS_COOKIE_PREFIX`, `KUDOS_COOKIE_TTL_DAYS`,
//!    `KUDOS_COOKIE_PATH`, `KUDOS_NOTICE_MS`.
//! 2. **Config file**: `kudos.toml` in the data directory.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `cookie_prefix` | `lab6_` | Prefix for the five cookie names |
//! | `cookie_ttl_days` | `365` | Lifetime of every cookie write, 1 to 36500 |
//! | `cookie_path` | `/` | `path` attribute of every cookie |
//! | `notice_ms` | `1400` | How long a notice stays visible, 0 to 3600000 |
//!
//! Changing the prefix or path makes earlier cookies invisible to the widget.

use crate::error::{KudosError, Result};
use crate::model::{CookieKeys, DEFAULT_COOKIE_PREFIX};
use crate::notice::DEFAULT_NOTICE_MS;
use crate::store::CookiePolicy;
use chrono::Duration;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "kudos.toml";

/// One day up to a century.
pub const TTL_DAYS_RANGE: RangeInclusive<i64> = 1..=36_500;

/// Zero (no notice lingers after its click) up to an hour.
pub const NOTICE_MS_RANGE: RangeInclusive<i64> = 0..=3_600_000;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KudosConfig {
    /// Prefix for the cookie names
    #[config(env = "KUDOS_COOKIE_PREFIX", default = "lab6_")]
    pub cookie_prefix: String,

    /// Cookie lifetime in days
    #[config(env = "KUDOS_COOKIE_TTL_DAYS", default = 365)]
    pub cookie_ttl_days: i64,

    /// `path` attribute for cookie writes
    #[config(env = "KUDOS_COOKIE_PATH", default = "/")]
    pub cookie_path: String,

    /// Notice lifetime in milliseconds
    #[config(env = "KUDOS_NOTICE_MS", default = 1400)]
    pub notice_ms: i64,
}

impl Default for KudosConfig {
    fn default() -> Self {
        Self {
            cookie_prefix: DEFAULT_COOKIE_PREFIX.to_string(),
            cookie_ttl_days: 365,
            cookie_path: "/".to_string(),
            notice_ms: DEFAULT_NOTICE_MS,
        }
    }
}

impl KudosConfig {
    /// Loads environment overrides on top of `<dir>/kudos.toml` (if present)
    /// on top of defaults.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let config = KudosConfig::builder()
            .env()
            .file(dir.as_ref().join(CONFIG_FILENAME))
            .load()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects lifetimes that would keep nothing (a zero TTL expires every
    /// cookie on write) or that fall outside the calendar.
    pub fn validate(&self) -> Result<()> {
        if !TTL_DAYS_RANGE.contains(&self.cookie_ttl_days) {
            return Err(KudosError::Config(format!(
                "cookie_ttl_days must be between {} and {}, got {}",
                TTL_DAYS_RANGE.start(),
                TTL_DAYS_RANGE.end(),
                self.cookie_ttl_days
            )));
        }
        if !NOTICE_MS_RANGE.contains(&self.notice_ms) {
            return Err(KudosError::Config(format!(
                "notice_ms must be between {} and {}, got {}",
                NOTICE_MS_RANGE.start(),
                NOTICE_MS_RANGE.end(),
                self.notice_ms
            )));
        }
        Ok(())
    }

    pub fn keys(&self) -> CookieKeys {
        CookieKeys::with_prefix(&self.cookie_prefix)
    }

    pub fn policy(&self) -> CookiePolicy {
        CookiePolicy {
            ttl: Duration::days(
                self.cookie_ttl_days
                    .clamp(*TTL_DAYS_RANGE.start(), *TTL_DAYS_RANGE.end()),
            ),
            path: self.cookie_path.clone(),
            ..CookiePolicy::default()
        }
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::milliseconds(
            self.notice_ms
                .clamp(*NOTICE_MS_RANGE.start(), *NOTICE_MS_RANGE.end()),
        )
    }
}
