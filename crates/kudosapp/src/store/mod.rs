//! # Storage Layer
//!
//! All widget state lives in cookies. This module is the persistence adapter
//! between the controller and whatever holds those cookies.
//!
//! ## Two Levels
//!
//! - [`CookieJar`]: the raw capability. It mirrors what a page sees through
//!   `document.cookie`: read the whole `name=value; name2=value2` header, or
//!   apply one cookie assignment line. It knows nothing about the widget.
//! - [`CookieStore`]: the typed adapter on top. It encodes names and values,
//!   attaches expiry/path/SameSite attributes, scans the header by key prefix,
//!   and offers integer and JSON helpers with fallbacks.
//!
//! ## Implementations
//!
//! - [`memory::MemoryJar`]: in-memory jar for tests, with a write-failure switch
//! - [`fs::FileJar`]: jar persisted to `cookies.json` for the terminal client
//! - `document::DocumentJar` (feature `wasm`): the browser's own cookie jar
//!
//! ## Failure Model
//!
//! Writes are fire-and-forget. If a jar rejects a write, [`CookieStore`] logs
//! it and returns normally; later reads simply see the old state or the
//! defaults. Reads never fail either: a jar that cannot produce its header is
//! treated as empty.

use crate::clock::Clock;
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use codec::{decode_component, encode_component, CookieLine};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub mod codec;
#[cfg(feature = "wasm")]
pub mod document;
pub mod fs;
pub mod memory;

/// Raw cookie storage, shaped like `document.cookie`.
///
/// Methods take `&self`; implementations use interior mutability since the
/// widget is single-threaded.
pub trait CookieJar {
    /// All live cookies as `name=value` pairs joined by `"; "`, in their
    /// encoded wire form.
    fn cookie_header(&self) -> Result<String>;

    /// Applies one cookie assignment (`name=value; expires=...; path=/`).
    /// A line whose expiry is not in the future deletes the cookie.
    fn set_cookie(&self, line: &str) -> Result<()>;
}

/// Result of a typed read that keeps "missing" and "unreadable" apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Absent,
    Malformed { raw: String },
    Present(T),
}

impl<T> Lookup<T> {
    /// Collapses absent and malformed into `fallback`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Lookup::Present(value) => value,
            _ => fallback,
        }
    }
}

/// Attributes attached to every cookie write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePolicy {
    pub ttl: Duration,
    pub path: String,
    pub same_site: String,
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::days(365),
            path: "/".to_string(),
            same_site: "Lax".to_string(),
        }
    }
}

/// Typed key-value access over a [`CookieJar`].
pub struct CookieStore<J: CookieJar, C: Clock> {
    jar: J,
    clock: C,
    policy: CookiePolicy,
}

impl<J: CookieJar, C: Clock> CookieStore<J, C> {
    pub fn new(jar: J, clock: C) -> Self {
        Self::with_policy(jar, clock, CookiePolicy::default())
    }

    pub fn with_policy(jar: J, clock: C, policy: CookiePolicy) -> Self {
        Self { jar, clock, policy }
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn policy(&self) -> &CookiePolicy {
        &self.policy
    }

    /// Stores `value` under `name` for `ttl`, replacing any previous value.
    /// A `ttl` that overflows the calendar skips the write.
    pub fn set_value(&self, name: &str, value: &str, ttl: Duration) {
        let Some(expires) = self.clock.now().checked_add_signed(ttl) else {
            warn!(
                cookie = name,
                ttl_secs = ttl.num_seconds(),
                "cookie lifetime out of range, skipping write"
            );
            return;
        };
        let line = CookieLine::new(encode_component(name), encode_component(value))
            .expires(expires)
            .path(&self.policy.path)
            .same_site(&self.policy.same_site);
        self.write(name, &line);
    }

    /// Stores `value` with the default lifetime.
    pub fn set(&self, name: &str, value: &str) {
        self.set_value(name, value, self.policy.ttl);
    }

    /// Returns the decoded value, or `None` when no cookie has this name.
    /// If the header carries the name more than once the last one wins.
    pub fn get_value(&self, name: &str) -> Option<String> {
        let header = match self.jar.cookie_header() {
            Ok(header) => header,
            Err(e) => {
                warn!(cookie = name, error = %e, "cookie jar unreadable, treating as empty");
                return None;
            }
        };

        let key = format!("{}=", encode_component(name));
        header
            .split("; ")
            .filter_map(|part| part.strip_prefix(key.as_str()))
            .last()
            .map(decode_component)
    }

    pub fn erase_value(&self, name: &str) {
        let epoch: DateTime<Utc> = DateTime::default();
        let line = CookieLine::new(encode_component(name), "")
            .expires(epoch)
            .path(&self.policy.path)
            .same_site(&self.policy.same_site);
        self.write(name, &line);
    }

    pub fn read_int(&self, name: &str) -> Lookup<i64> {
        match self.get_value(name) {
            None => Lookup::Absent,
            Some(raw) => match parse_leading_int(&raw) {
                Some(n) => Lookup::Present(n),
                None => Lookup::Malformed { raw },
            },
        }
    }

    pub fn get_int(&self, name: &str, fallback: i64) -> i64 {
        self.read_int(name).unwrap_or(fallback)
    }

    pub fn set_int(&self, name: &str, value: i64) {
        self.set(name, &value.to_string());
    }

    /// An empty stored value counts as malformed.
    pub fn read_json<T: DeserializeOwned>(&self, name: &str) -> Lookup<T> {
        match self.get_value(name) {
            None => Lookup::Absent,
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Lookup::Present(value),
                Err(_) => Lookup::Malformed { raw },
            },
        }
    }

    pub fn get_json<T: DeserializeOwned>(&self, name: &str, fallback: T) -> T {
        self.read_json(name).unwrap_or(fallback)
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(encoded) => self.set(name, &encoded),
            Err(e) => warn!(cookie = name, error = %e, "value not serializable, skipping write"),
        }
    }

    fn write(&self, name: &str, line: &CookieLine) {
        let rendered = line.render();
        match self.jar.set_cookie(&rendered) {
            Ok(()) => debug!(cookie = name, line = %rendered, "cookie written"),
            Err(e) => warn!(cookie = name, error = %e, "cookie write rejected"),
        }
    }
}

/// Reads an optionally signed run of digits at the start of `text`, ignoring
/// leading whitespace and anything after the digits.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => ("-", &text[1..]),
        Some(b'+') => ("", &text[1..]),
        _ => ("", text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    format!("{}{}", sign, &rest[..digits_len]).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryJar;
    use super::*;
    use crate::clock::ManualClock;

    fn store() -> CookieStore<MemoryJar<ManualClock>, ManualClock> {
        let clock = ManualClock::new();
        CookieStore::new(MemoryJar::new(clock.clone()), clock)
    }

    #[test]
    fn absent_is_not_empty() {
        let store = store();
        assert_eq!(store.get_value("k"), None);

        store.set("k", "");
        assert_eq!(store.get_value("k"), Some(String::new()));
    }

    #[test]
    fn set_overwrites() {
        let store = store();
        store.set("k", "one");
        store.set("k", "two");
        assert_eq!(store.get_value("k").as_deref(), Some("two"));
    }

    #[test]
    fn prefix_of_another_key_does_not_match() {
        let store = store();
        store.set("lab6_likes_total", "9");
        assert_eq!(store.get_value("lab6_likes"), None);

        store.set("lab6_likes", "3");
        assert_eq!(store.get_value("lab6_likes").as_deref(), Some("3"));
        assert_eq!(store.get_value("lab6_likes_total").as_deref(), Some("9"));
    }

    #[test]
    fn delimiters_survive_storage() {
        let store = store();
        store.set("odd; name=", "a=b; c=d 🙂");
        assert_eq!(store.get_value("odd; name=").as_deref(), Some("a=b; c=d 🙂"));
        assert!(store.jar().cookie_header().unwrap().contains("odd%3B%20name%3D="));
    }

    #[test]
    fn erase_removes_value() {
        let store = store();
        store.set("k", "v");
        store.erase_value("k");
        assert_eq!(store.get_value("k"), None);
    }

    #[test]
    fn ttl_expires_value() {
        let store = store();
        store.set_value("k", "v", Duration::minutes(5));
        store.clock().advance(Duration::minutes(4));
        assert!(store.get_value("k").is_some());
        store.clock().advance(Duration::minutes(1));
        assert_eq!(store.get_value("k"), None);
    }

    #[test]
    fn int_reads_distinguish_cases() {
        let store = store();
        assert_eq!(store.read_int("n"), Lookup::Absent);

        store.set("n", "abc");
        assert_eq!(
            store.read_int("n"),
            Lookup::Malformed { raw: "abc".into() }
        );
        assert_eq!(store.get_int("n", 7), 7);

        store.set_int("n", 42);
        assert_eq!(store.read_int("n"), Lookup::Present(42));
    }

    #[test]
    fn int_parsing_is_lenient_like_parse_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  12px"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("1.9"), Some(1));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("NaN"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn json_reads_distinguish_cases() {
        let store = store();
        assert_eq!(store.read_json::<Vec<String>>("c"), Lookup::Absent);

        store.set("c", "[not json");
        assert!(matches!(
            store.read_json::<Vec<String>>("c"),
            Lookup::Malformed { .. }
        ));
        assert_eq!(store.get_json("c", vec!["fb".to_string()]), vec!["fb"]);

        store.set("c", "");
        assert!(matches!(
            store.read_json::<Vec<String>>("c"),
            Lookup::Malformed { .. }
        ));

        store.set("c", "{\"a\":1}");
        assert_eq!(store.get_json::<Vec<String>>("c", Vec::new()), Vec::<String>::new());
    }

    #[test]
    fn json_sequence_round_trip_keeps_order() {
        let store = store();
        let comments: Vec<String> = vec![
            "first".into(),
            "semi; colon".into(),
            "equals = sign".into(),
            "\"quoted\"".into(),
            "ünïcødé 🙂".into(),
        ];
        store.set_json("c", &comments);
        assert_eq!(store.get_json::<Vec<String>>("c", Vec::new()), comments);

        let empty: Vec<String> = Vec::new();
        store.set_json("c", &empty);
        assert_eq!(store.get_value("c").as_deref(), Some("[]"));
    }

    #[test]
    fn rejected_write_is_silent() {
        let store = store();
        store.set("k", "before");
        store.jar().set_simulate_write_error(true);

        store.set("k", "after");
        store.erase_value("k");
        assert_eq!(store.get_value("k").as_deref(), Some("before"));

        store.set("fresh", "1");
        assert_eq!(store.get_int("fresh", 0), 0);
    }

    #[test]
    fn out_of_range_lifetime_skips_write() {
        let store = store();
        store.set("k", "kept");

        store.set_value("k", "lost", Duration::MAX);
        assert_eq!(store.get_value("k").as_deref(), Some("kept"));
        assert_eq!(store.jar().write_count(), 1);
    }

    #[test]
    fn writes_carry_policy_attributes() {
        let store = store();
        store.set("k", "v");
        let line = store.jar().last_line().unwrap();
        assert!(line.starts_with("k=v; expires="));
        assert!(line.ends_with("; path=/; SameSite=Lax"));

        store.erase_value("k");
        let line = store.jar().last_line().unwrap();
        assert!(line.starts_with("k=; expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }
}
