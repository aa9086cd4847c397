use async_trait::async_trait;
use clap::Parser;
use hooklog_core::use_cases::events::ListEventRecordsInterface;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Show event counts
#[derive(Parser)]
pub(crate) struct StatsCommand;

#[async_trait]
impl Command for StatsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let core_ctx = ctx.as_core_context();
        let list: &dyn ListEventRecordsInterface = ctx.core_module.resolve_ref();
        let stats = list.run(&core_ctx).await?.stats;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Total: {}", stats.total)?;
        writeln!(writer, "Pushes: {}", stats.pushes)?;
        writeln!(writer, "Pull requests: {}", stats.pull_requests)?;
        writeln!(writer, "Merged pull requests: {}", stats.pull_request_merged)?;

        Ok(())
    }
}
