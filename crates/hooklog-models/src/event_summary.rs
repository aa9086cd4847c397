use serde::{Deserialize, Serialize};

use crate::{EventRecord, EventStats};

/// Stored records with their counts.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct EventRecordsSummary {
    pub webhooks: Vec<EventRecord>,
    pub stats: EventStats,
}
