//! Export command: render a complete article.

use std::path::PathBuf;

use clap::Args;
use zenpress_article::Exporter;

use super::{CommonArgs, MappingArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    mapping: MappingArgs,

    /// Write the article to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

impl ExportArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let exporter = Exporter::new(&self.common.token);
        let article = exporter.render(&self.common.page_id, &self.mapping.to_mapping())?;

        match &self.out {
            Some(path) => {
                std::fs::write(path, &article)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.payload(&article),
        }
        Ok(())
    }
}
