use async_trait::async_trait;
use hooklog_models::EventRecord;
use shaku::{Component, Interface};
use tracing::info;

use crate::{
    event_type::EventType,
    payload::{extract_event_record, WebhookPayload},
    CoreContext, Result,
};

#[async_trait]
pub trait IngestWebhookEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event_type: &str,
        body: &str,
    ) -> Result<EventRecord>;
}

#[derive(Component)]
#[shaku(interface = IngestWebhookEventInterface)]
pub(crate) struct IngestWebhookEvent;

#[async_trait]
impl IngestWebhookEventInterface for IngestWebhookEvent {
    #[tracing::instrument(skip(self, ctx, body), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event_type: &str,
        body: &str,
    ) -> Result<EventRecord> {
        let payload = WebhookPayload::parse(body)?;
        let record = extract_event_record(&EventType::from(event_type), &payload);
        let record = ctx.db_service.event_records_create(record).await?;

        info!(
            id = record.id,
            request_id = record.request_id,
            action = %record.action,
            message = "Stored webhook event"
        );

        Ok(record)
    }
}
