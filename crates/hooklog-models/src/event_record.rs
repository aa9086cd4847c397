use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{parse_event_timestamp, EventAction, EventTime};

/// Stored webhook event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    /// Store identifier, assigned on insert.
    pub id: u64,
    /// Head commit SHA.
    pub request_id: String,
    /// Sender login.
    pub author: String,
    pub action: EventAction,
    pub from_branch: Option<String>,
    pub to_branch: String,
    /// Provider timestamp, as sent.
    pub timestamp: Option<String>,
    pub time: Option<EventTime>,
}

impl EventRecord {
    /// Instant of the event, when the timestamp is parseable.
    pub fn occurred_at(&self) -> Option<OffsetDateTime> {
        self.timestamp
            .as_deref()
            .and_then(|t| parse_event_timestamp(t).ok())
    }

    /// Ordering used by every store listing.
    ///
    /// Timestamped records come first, latest instant first. Records without a
    /// parseable timestamp come last. Ties are broken by descending id.
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        let by_instant = match (a.occurred_at(), b.occurred_at()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        by_instant.then_with(|| b.id.cmp(&a.id))
    }
}
