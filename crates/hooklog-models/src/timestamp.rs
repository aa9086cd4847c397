use thiserror::Error;
use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime,
};

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: time::error::Parse,
    },
}

/// Parse a provider timestamp.
///
/// Offset-less values are read as UTC, including the space separated
/// `YYYY-MM-DD HH:MM[:SS]` form.
pub fn parse_event_timestamp(value: &str) -> Result<OffsetDateTime, TimestampError> {
    if let Ok(datetime) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(datetime);
    }

    if let Ok(datetime) = OffsetDateTime::parse(value, &Iso8601::DEFAULT) {
        return Ok(datetime);
    }

    PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)
        .or_else(|e| {
            PrimitiveDateTime::parse(
                value,
                format_description!("[year]-[month]-[day] [hour]:[minute][optional [:[second]]]"),
            )
            .map_err(|_| e)
        })
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| TimestampError::InvalidTimestamp {
            value: value.into(),
            source: e,
        })
}
