//! Webhook payload extraction.
//!
//! Every lookup is lenient: a missing key, or a value of an unexpected JSON
//! type, is read as absent.

use hooklog_models::{parse_event_timestamp, EventAction, EventRecord, EventTime};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{event_type::EventType, DomainError, Result};

/// Raw webhook payload.
#[derive(Debug, Clone)]
pub struct WebhookPayload(Value);

impl WebhookPayload {
    /// Parse a request body. The body must be a JSON object.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| DomainError::InvalidPayload { source: e })?;

        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(DomainError::UnexpectedPayloadShape)
        }
    }

    fn str_at(&self, pointer: &str) -> Option<&str> {
        self.0.pointer(pointer).and_then(Value::as_str)
    }

    fn non_empty_str_at(&self, pointer: &str) -> Option<&str> {
        self.str_at(pointer).filter(|s| !s.is_empty())
    }

    fn bool_at(&self, pointer: &str) -> Option<bool> {
        self.0.pointer(pointer).and_then(Value::as_bool)
    }
}

impl From<Value> for WebhookPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Extract the source branch from a commit message.
///
/// The message is lower-cased, then the text following the first `"from "`
/// up to the end of its line is returned, trimmed.
pub fn extract_from_branch(message: &str) -> Option<String> {
    let message = message.to_lowercase();
    let (_, rest) = message.split_once("from ")?;
    let line = rest.split('\n').next().unwrap_or_default();

    Some(line.trim().to_owned())
}

/// Build a record (without id) from a webhook payload.
pub fn extract_event_record(event_type: &EventType, payload: &WebhookPayload) -> EventRecord {
    let request_id = payload
        .non_empty_str_at("/after")
        .or_else(|| payload.str_at("/pull_request/head/sha"))
        .unwrap_or_default()
        .to_owned();
    let author = payload
        .str_at("/sender/login")
        .unwrap_or("unknown")
        .to_owned();

    let mut action = EventAction::from(event_type.as_str());
    let (from_branch, to_branch, timestamp) = match event_type {
        EventType::Push => {
            let to_branch = payload
                .str_at("/ref")
                .unwrap_or_default()
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_owned();
            let from_branch =
                extract_from_branch(payload.str_at("/head_commit/message").unwrap_or_default());
            let timestamp = payload.non_empty_str_at("/head_commit/timestamp");

            (from_branch, to_branch, timestamp)
        }
        EventType::PullRequest => {
            if payload.bool_at("/pull_request/merged") == Some(true) {
                action = EventAction::PullRequestMerged;
            }

            let from_branch = payload
                .str_at("/pull_request/head/ref")
                .unwrap_or_default()
                .to_owned();
            let to_branch = payload
                .str_at("/pull_request/base/ref")
                .unwrap_or_default()
                .to_owned();
            let timestamp = payload.non_empty_str_at("/pull_request/updated_at");

            (Some(from_branch), to_branch, timestamp)
        }
        EventType::Other(_) => (None, String::new(), None),
    };

    let time = match timestamp {
        Some(timestamp) => match parse_event_timestamp(timestamp) {
            Ok(datetime) => Some(EventTime::from_datetime(datetime)),
            Err(e) => {
                warn!(
                    event_type = %event_type,
                    error = %e,
                    message = "Could not decompose event timestamp"
                );
                None
            }
        },
        None => {
            debug!(event_type = %event_type, message = "Event without timestamp");
            None
        }
    };

    EventRecord {
        id: 0,
        request_id,
        author,
        action,
        from_branch,
        to_branch,
        timestamp: timestamp.map(ToOwned::to_owned),
        time,
    }
}
