use crate::clock::Clock;
use crate::model::{CookieKeys, VoteMarker, COMMENTED_MARKER};
use crate::store::{CookieJar, CookieStore};

pub const DEFAULT_COUNT: i64 = 0;

pub fn vote_marker<J: CookieJar, C: Clock>(store: &CookieStore<J, C>, keys: &CookieKeys) -> VoteMarker {
    VoteMarker::from_cookie(store.get_value(&keys.vote).as_deref())
}

/// Only the exact marker counts; any other value is treated as not commented.
pub fn has_commented<J: CookieJar, C: Clock>(store: &CookieStore<J, C>, keys: &CookieKeys) -> bool {
    store.get_value(&keys.commented).as_deref() == Some(COMMENTED_MARKER)
}

pub fn comments<J: CookieJar, C: Clock>(store: &CookieStore<J, C>, keys: &CookieKeys) -> Vec<String> {
    store.get_json(&keys.comments, Vec::new())
}

pub fn count<J: CookieJar, C: Clock>(store: &CookieStore<J, C>, name: &str) -> i64 {
    store.get_int(name, DEFAULT_COUNT)
}
