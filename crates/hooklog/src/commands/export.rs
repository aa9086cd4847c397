use std::{fs::File, io::BufWriter, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use hooklog_database_interface::Exchanger;

use super::{Command, CommandContext};
use crate::Result;

/// Export all event records
#[derive(Parser)]
pub(crate) struct ExportCommand {
    /// Output file, stdout if not precised
    #[clap(short, long)]
    output_file: Option<PathBuf>,
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        if let Some(file_path) = self.output_file {
            let file = File::create(file_path)?;
            let mut writer = BufWriter::new(file);
            Exchanger::export_to_json(ctx.db_service.as_ref(), &mut writer).await?;
        } else {
            let mut writer = ctx.writer.write().await;
            Exchanger::export_to_json(ctx.db_service.as_ref(), &mut *writer).await?;
        }

        Ok(())
    }
}
