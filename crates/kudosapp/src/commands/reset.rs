use crate::clock::Clock;
use crate::commands::helpers::{count, vote_marker};
use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::model::CookieKeys;
use crate::store::{CookieJar, CookieStore};
use tracing::debug;

pub const RESET_DONE: &str = "Your vote & comments were reset. You can vote again now.";

/// Withdraws the visitor's vote and comment.
///
/// The counter matching the previous vote goes down by one, never below
/// zero. Without a recognised previous vote no counter moves. Always
/// succeeds.
pub fn run<J: CookieJar, C: Clock>(
    store: &CookieStore<J, C>,
    keys: &CookieKeys,
    input: &mut String,
) -> CmdResult {
    let previous = vote_marker(store, keys);

    if let Some(vote) = previous.vote() {
        let counter = keys.counter(vote);
        let next = count(store, counter).saturating_sub(1).max(0);
        store.set_int(counter, next);
    }

    store.erase_value(&keys.vote);
    store.erase_value(&keys.commented);
    store.set_json::<[String]>(&keys.comments, &[]);
    input.clear();

    debug!(?previous, "widget reset");
    CmdResult::new(Outcome::Reset { previous }).with_message(CmdMessage::success(RESET_DONE))
}
