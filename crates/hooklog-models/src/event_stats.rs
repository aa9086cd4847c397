use serde::{Deserialize, Serialize};

/// Record counts by action.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct EventStats {
    pub total: u64,
    pub pushes: u64,
    pub pull_requests: u64,
    pub pull_request_merged: u64,
}
