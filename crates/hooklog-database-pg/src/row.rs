use hooklog_models::{EventRecord, EventTime};
use sqlx::{postgres::PgRow, FromRow, Row};

pub(crate) struct EventRecordRow(EventRecord);

impl From<EventRecordRow> for EventRecord {
    fn from(r: EventRecordRow) -> Self {
        r.0
    }
}

impl<'r> FromRow<'r, PgRow> for EventRecordRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        let hours: Option<String> = row.try_get("time_hours")?;
        let minutes: Option<String> = row.try_get("time_minutes")?;
        let days: Option<String> = row.try_get("time_days")?;
        let time = match (hours, minutes, days) {
            (Some(hours), Some(minutes), Some(days)) => Some(EventTime {
                hours,
                minutes,
                days,
            }),
            _ => None,
        };

        Ok(Self(EventRecord {
            id: row.try_get::<i32, _>("id")? as u64,
            request_id: row.try_get("request_id")?,
            author: row.try_get("author")?,
            action: row.try_get::<String, _>("action")?.into(),
            from_branch: row.try_get("from_branch")?,
            to_branch: row.try_get("to_branch")?,
            timestamp: row.try_get("event_timestamp")?,
            time,
        }))
    }
}
