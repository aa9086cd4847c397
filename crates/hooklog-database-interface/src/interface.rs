use async_trait::async_trait;
use hooklog_models::{EventAction, EventRecord};

use crate::{DatabaseError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DbService: Send + Sync {
    /// Insert a record. The instance `id` is ignored and a new one is assigned.
    async fn event_records_create(&self, instance: EventRecord) -> Result<EventRecord>;
    async fn event_records_get(&self, id: u64) -> Result<Option<EventRecord>>;
    async fn event_records_get_expect(&self, id: u64) -> Result<EventRecord> {
        self.event_records_get(id)
            .await?
            .ok_or(DatabaseError::UnknownEventRecord(id))
    }
    /// All records, in [`EventRecord::newest_first`] order.
    async fn event_records_all(&self) -> Result<Vec<EventRecord>>;
    /// Count records with the given action, or every record on `None`.
    async fn event_records_count(&self, action: Option<EventAction>) -> Result<u64>;
    async fn health_check(&self) -> Result<()>;
}
