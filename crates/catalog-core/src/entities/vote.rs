//! Vote outcome types - what a toggle did to one caller's upvote

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a toggle did to the caller's vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    Added,
    Removed,
    /// A concurrent toggle from the same caller won the race
    Unchanged,
}

impl VoteAction {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for VoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a toggle: the action taken, whether the caller holds a vote
/// afterwards, and the tool's counter afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    pub action: VoteAction,
    pub voted: bool,
    pub upvotes: i32,
}

impl VoteOutcome {
    /// Create a new VoteOutcome
    pub fn new(action: VoteAction, voted: bool, upvotes: i32) -> Self {
        Self {
            action,
            voted,
            upvotes,
        }
    }

    /// Whether the toggle changed the ledger
    #[inline]
    pub fn changed(&self) -> bool {
        !matches!(self.action, VoteAction::Unchanged)
    }
}
