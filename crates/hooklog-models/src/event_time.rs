use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Timestamp components, as strings.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct EventTime {
    pub hours: String,
    pub minutes: String,
    pub days: String,
}

impl EventTime {
    /// Decompose a datetime, keeping its own offset.
    pub fn from_datetime(datetime: OffsetDateTime) -> Self {
        Self {
            hours: datetime.hour().to_string(),
            minutes: datetime.minute().to_string(),
            days: datetime.day().to_string(),
        }
    }
}
