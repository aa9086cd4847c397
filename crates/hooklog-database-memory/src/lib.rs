use std::{collections::BTreeMap, sync::RwLock};

use async_trait::async_trait;
use hooklog_database_interface::{DbService, Result};
use hooklog_models::{EventAction, EventRecord};

#[derive(Debug, Default)]
pub struct MemoryDb {
    event_records: RwLock<BTreeMap<u64, EventRecord>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl DbService for MemoryDb {
    async fn event_records_create(&self, mut instance: EventRecord) -> Result<EventRecord> {
        let mut records = self.event_records.write().unwrap();
        instance.id = records.last_key_value().map_or(0, |(id, _)| *id) + 1;
        records.insert(instance.id, instance.clone());
        Ok(instance)
    }

    async fn event_records_get(&self, id: u64) -> Result<Option<EventRecord>> {
        Ok(self.event_records.read().unwrap().get(&id).cloned())
    }

    async fn event_records_all(&self) -> Result<Vec<EventRecord>> {
        let mut values: Vec<_> = self
            .event_records
            .read()
            .unwrap()
            .values()
            .cloned()
            .collect();
        values.sort_by(EventRecord::newest_first);
        Ok(values)
    }

    async fn event_records_count(&self, action: Option<EventAction>) -> Result<u64> {
        let records = self.event_records.read().unwrap();
        let count = match action {
            Some(action) => records.values().filter(|r| r.action == action).count(),
            None => records.len(),
        };

        Ok(count as u64)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
