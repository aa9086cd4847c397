use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Normalized event category.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Clone, Default)]
#[serde(from = "String", into = "String")]
pub enum EventAction {
    /// Push.
    #[default]
    Push,
    /// Pull request, not merged.
    PullRequest,
    /// Merged pull request.
    PullRequestMerged,
    /// Any other event type, kept verbatim.
    Other(String),
}

impl EventAction {
    /// Get action as str.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::PullRequestMerged => "pull_request_merged",
            Self::Other(value) => value,
        }
    }
}

impl Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EventAction {
    fn from(value: &str) -> Self {
        match value {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            "pull_request_merged" => Self::PullRequestMerged,
            other => Self::Other(other.into()),
        }
    }
}

impl From<String> for EventAction {
    fn from(value: String) -> Self {
        Self::from(&value[..])
    }
}

impl From<EventAction> for String {
    fn from(action: EventAction) -> Self {
        match action {
            EventAction::Other(value) => value,
            known => known.as_str().into(),
        }
    }
}
