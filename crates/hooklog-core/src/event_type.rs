//! Event types.

/// Webhook event type, from the event header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    /// Push event.
    Push,
    /// Pull request event.
    PullRequest,
    /// Any other event, kept verbatim.
    Other(String),
}

impl EventType {
    /// Convert event type to str.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        match value {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            name => Self::Other(name.to_owned()),
        }
    }
}
