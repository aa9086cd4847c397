//! Core module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod event_type;
pub mod payload;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::events::{
    ingest_webhook_event::IngestWebhookEvent, list_event_records::ListEventRecords,
};

module! {
    pub CoreModule {
        components = [IngestWebhookEvent, ListEventRecords],
        providers = []
    }
}
