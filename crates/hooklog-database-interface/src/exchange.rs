use std::io::{Read, Write};

use hooklog_models::EventRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{DatabaseError, DbService, Result};

#[derive(Debug, Serialize, Deserialize)]
struct ExchangeData {
    event_records: Vec<EventRecord>,
}

pub struct Exchanger;

impl Exchanger {
    pub async fn export_to_json<W: Write + ?Sized>(
        db_service: &dyn DbService,
        writer: &mut W,
    ) -> Result<()> {
        let data = ExchangeData {
            event_records: db_service.event_records_all().await?,
        };

        serde_json::to_writer_pretty(writer, &data)
            .map_err(|e| DatabaseError::ExchangeJsonError { source: e })?;

        Ok(())
    }

    /// Import records from an export. Records get new identifiers.
    pub async fn import_from_json<R: Read>(db_service: &dyn DbService, reader: R) -> Result<usize> {
        let data: ExchangeData = serde_json::from_reader(reader)
            .map_err(|e| DatabaseError::ExchangeJsonError { source: e })?;

        // Exports are newest first: insert oldest first to keep relative ids.
        let count = data.event_records.len();
        for record in data.event_records.into_iter().rev() {
            info!(
                request_id = record.request_id,
                action = %record.action,
                message = "Importing event record"
            );

            db_service.event_records_create(record).await?;
        }

        Ok(count)
    }
}
