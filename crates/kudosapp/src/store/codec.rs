//! Cookie line codec.
//!
//! Names and values are escaped with the same character set as JavaScript's
//! `encodeURIComponent`, so cookies written here read back in a browser and
//! the other way round. Expiry dates use the `toUTCString()` layout.

use chrono::{DateTime, NaiveDateTime, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Invalid UTF-8 sequences decode lossily instead of failing the read.
pub fn decode_component(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

pub fn format_expires(at: DateTime<Utc>) -> String {
    at.format(EXPIRES_FORMAT).to_string()
}

pub fn parse_expires(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text.trim(), EXPIRES_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// One `name=value; attr=...` cookie assignment, with name and value kept in
/// their encoded wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieLine {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
}

impl CookieLine {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires: None,
            path: None,
            same_site: None,
        }
    }

    pub fn expires(mut self, at: DateTime<Utc>) -> Self {
        self.expires = Some(at);
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn same_site(mut self, policy: &str) -> Self {
        self.same_site = Some(policy.to_string());
        self
    }

    /// Cookies without an expiry are session cookies and never expire here.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|at| at <= now)
    }

    pub fn render(&self) -> String {
        let mut line = format!("{}={}", self.name, self.value);
        if let Some(at) = self.expires {
            line.push_str("; expires=");
            line.push_str(&format_expires(at));
        }
        if let Some(path) = &self.path {
            line.push_str("; path=");
            line.push_str(path);
        }
        if let Some(policy) = &self.same_site {
            line.push_str("; SameSite=");
            line.push_str(policy);
        }
        line
    }

    /// Parses a cookie assignment. Unknown attributes are ignored; an
    /// unparsable `expires` is treated as absent. Returns `None` when there is
    /// no `name=` pair.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(';');
        let (name, value) = parts.next()?.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut cookie = CookieLine::new(name, value.trim());
        for attr in parts {
            let (key, val) = match attr.split_once('=') {
                Some((key, val)) => (key.trim(), val.trim()),
                None => (attr.trim(), ""),
            };
            match key.to_ascii_lowercase().as_str() {
                "expires" => cookie.expires = parse_expires(val),
                "path" => cookie.path = Some(val.to_string()),
                "samesite" => cookie.same_site = Some(val.to_string()),
                _ => {}
            }
        }
        Some(cookie)
    }
}
