use crate::clock::Clock;
use crate::commands::helpers::{count, vote_marker};
use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::model::{CookieKeys, Vote};
use crate::store::{CookieJar, CookieStore};
use tracing::debug;

pub const ALREADY_VOTED: &str = "You already voted. Use Reset to change your vote.";

/// Casts `vote` unless a vote marker already exists.
///
/// The counter is written before the marker. The two writes are separate
/// cookies, so an interruption between them can leave a counted vote without
/// a marker.
pub fn run<J: CookieJar, C: Clock>(
    store: &CookieStore<J, C>,
    keys: &CookieKeys,
    vote: Vote,
) -> CmdResult {
    let marker = vote_marker(store, keys);
    if marker.is_set() {
        debug!(?marker, attempted = %vote, "vote rejected");
        return CmdResult::new(Outcome::AlreadyVoted { marker })
            .with_message(CmdMessage::warning(ALREADY_VOTED));
    }

    let counter = keys.counter(vote);
    let next = count(store, counter).saturating_add(1);
    store.set_int(counter, next);
    store.set(&keys.vote, vote.as_str());

    debug!(%vote, total = next, "vote cast");
    CmdResult::new(Outcome::Voted { vote })
        .with_message(CmdMessage::success(format!("Thanks for your {}!", vote)))
}
