pub(crate) mod ingest_webhook_event;
pub(crate) mod list_event_records;

pub use ingest_webhook_event::IngestWebhookEventInterface;
pub use list_event_records::ListEventRecordsInterface;
