use crate::clock::Clock;
use crate::commands::helpers::DEFAULT_COUNT;
use crate::commands::{CmdResult, Outcome};
use crate::model::CookieKeys;
use crate::store::{CookieJar, CookieStore};
use tracing::debug;

/// Seeds the counters and the comment list when they are missing.
///
/// Only absence triggers a write: a present but unreadable value is left as
/// it is and reads fall back to defaults. The vote and commented markers are
/// never seeded; their absence is the "not yet" state.
pub fn run<J: CookieJar, C: Clock>(store: &CookieStore<J, C>, keys: &CookieKeys) -> CmdResult {
    let mut seeded = Vec::new();

    for name in [&keys.likes, &keys.dislikes] {
        if store.get_value(name).is_none() {
            store.set_int(name, DEFAULT_COUNT);
            seeded.push(name.clone());
        }
    }

    if store.get_value(&keys.comments).is_none() {
        store.set_json::<[String]>(&keys.comments, &[]);
        seeded.push(keys.comments.clone());
    }

    debug!(?seeded, "widget initialized");
    CmdResult::new(Outcome::Initialized { seeded })
}
