//! Domain models.

mod event_action;
mod event_record;
mod event_stats;
mod event_summary;
mod event_time;
mod timestamp;

pub use event_action::EventAction;
pub use event_record::EventRecord;
pub use event_stats::EventStats;
pub use event_summary::EventRecordsSummary;
pub use event_time::EventTime;
pub use timestamp::{parse_event_timestamp, TimestampError};
