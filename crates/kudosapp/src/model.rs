use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every cookie the widget writes.
pub const DEFAULT_COOKIE_PREFIX: &str = "lab6_";

/// Value stored in the commented cookie once a comment exists.
pub const COMMENTED_MARKER: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Like,
    Dislike,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Like => "like",
            Vote::Dislike => "dislike",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Vote::Like),
            "dislike" => Ok(Vote::Dislike),
            other => Err(format!("Unknown vote: {}", other)),
        }
    }
}

/// What the vote cookie says about the current visitor.
///
/// Any non-empty value blocks further voting, even one we cannot decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum VoteMarker {
    Absent,
    Cast(Vote),
    Unrecognized(String),
}

impl VoteMarker {
    pub fn from_cookie(value: Option<&str>) -> Self {
        match value {
            None | Some("") => VoteMarker::Absent,
            Some(raw) => raw
                .parse()
                .map(VoteMarker::Cast)
                .unwrap_or_else(|_| VoteMarker::Unrecognized(raw.to_string())),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, VoteMarker::Absent)
    }

    pub fn vote(&self) -> Option<Vote> {
        match self {
            VoteMarker::Cast(vote) => Some(*vote),
            _ => None,
        }
    }
}

/// Cookie names for the five persisted entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieKeys {
    pub likes: String,
    pub dislikes: String,
    pub vote: String,
    pub commented: String,
    pub comments: String,
}

impl CookieKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            likes: format!("{}likes", prefix),
            dislikes: format!("{}dislikes", prefix),
            vote: format!("{}vote", prefix),
            commented: format!("{}commented", prefix),
            comments: format!("{}comments", prefix),
        }
    }

    /// The counter a vote increments.
    pub fn counter(&self, vote: Vote) -> &str {
        match vote {
            Vote::Like => &self.likes,
            Vote::Dislike => &self.dislikes,
        }
    }
}

impl Default for CookieKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_COOKIE_PREFIX)
    }
}
