use async_trait::async_trait;
use hooklog_models::{EventAction, EventRecordsSummary, EventStats};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[async_trait]
pub trait ListEventRecordsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<EventRecordsSummary>;
}

#[derive(Component)]
#[shaku(interface = ListEventRecordsInterface)]
pub(crate) struct ListEventRecords;

#[async_trait]
impl ListEventRecordsInterface for ListEventRecords {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<EventRecordsSummary> {
        let db = ctx.db_service;
        let webhooks = db.event_records_all().await?;

        let stats = EventStats {
            total: db.event_records_count(None).await?,
            pushes: db.event_records_count(Some(EventAction::Push)).await?,
            pull_requests: db
                .event_records_count(Some(EventAction::PullRequest))
                .await?,
            pull_request_merged: db
                .event_records_count(Some(EventAction::PullRequestMerged))
                .await?,
        };

        Ok(EventRecordsSummary { webhooks, stats })
    }
}
