use crate::clock::Clock;
use crate::commands::helpers::{comments, count, has_commented, vote_marker};
use crate::model::{CookieKeys, Vote, VoteMarker};
use crate::notice::Notice;
use crate::store::{CookieJar, CookieStore};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub picked: bool,
    pub disabled: bool,
}

/// Everything a UI needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub likes: i64,
    pub dislikes: i64,
    pub vote: VoteMarker,
    pub like_button: ButtonView,
    pub dislike_button: ButtonView,
    pub commented: bool,
    pub comments: Vec<String>,
    pub input: String,
    pub notice: Option<Notice>,
}

fn button(marker: &VoteMarker, which: Vote) -> ButtonView {
    ButtonView {
        picked: marker.vote() == Some(which),
        disabled: marker.is_set(),
    }
}

/// Builds the view from persisted state plus the page-local input and notice.
/// Reads only; calling it repeatedly without intervening writes yields equal
/// views.
pub fn run<J: CookieJar, C: Clock>(
    store: &CookieStore<J, C>,
    keys: &CookieKeys,
    input: &str,
    notice: Option<&Notice>,
) -> WidgetView {
    let marker = vote_marker(store, keys);
    WidgetView {
        likes: count(store, &keys.likes),
        dislikes: count(store, &keys.dislikes),
        like_button: button(&marker, Vote::Like),
        dislike_button: button(&marker, Vote::Dislike),
        vote: marker,
        commented: has_commented(store, keys),
        comments: comments(store, keys),
        input: input.to_string(),
        notice: notice.cloned(),
    }
}
