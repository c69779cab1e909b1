use crate::clock::Clock;
use crate::commands::helpers::{comments, has_commented};
use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::model::{CookieKeys, COMMENTED_MARKER};
use crate::store::{CookieJar, CookieStore};
use tracing::debug;

pub const EMPTY_COMMENT: &str = "Write something first 🙂";
pub const ALREADY_COMMENTED: &str = "You already left a comment. Use Reset to clear it.";
pub const COMMENT_SUBMITTED: &str = "Comment submitted!";

/// Submits the pending input as the visitor's comment.
///
/// The emptiness check runs before the already-commented check. On success
/// the trimmed text is appended and `input` is cleared; on rejection `input`
/// is left untouched.
pub fn submit<J: CookieJar, C: Clock>(
    store: &CookieStore<J, C>,
    keys: &CookieKeys,
    input: &mut String,
) -> CmdResult {
    let text = input.trim();
    if text.is_empty() {
        return CmdResult::new(Outcome::EmptyComment)
            .with_message(CmdMessage::warning(EMPTY_COMMENT));
    }

    if has_commented(store, keys) {
        debug!("comment rejected, visitor already commented");
        return CmdResult::new(Outcome::AlreadyCommented)
            .with_message(CmdMessage::warning(ALREADY_COMMENTED));
    }

    let text = text.to_string();
    let mut list = comments(store, keys);
    list.push(text.clone());
    store.set_json(&keys.comments, &list);
    store.set(&keys.commented, COMMENTED_MARKER);
    input.clear();

    debug!(len = text.len(), "comment stored");
    CmdResult::new(Outcome::Commented { text }).with_message(CmdMessage::success(COMMENT_SUBMITTED))
}

/// Empties the pending input. Persisted state is not touched and no notice is
/// raised.
pub fn clear_input(input: &mut String) -> CmdResult {
    input.clear();
    CmdResult::new(Outcome::InputCleared)
}
