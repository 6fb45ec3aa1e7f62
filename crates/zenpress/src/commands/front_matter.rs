//! Front matter command: render the metadata block only.

use clap::Args;
use zenpress_article::Exporter;

use super::{CommonArgs, MappingArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the front-matter command.
#[derive(Args)]
pub(crate) struct FrontMatterArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    mapping: MappingArgs,
}

impl FrontMatterArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let exporter = Exporter::new(&self.common.token);
        let front_matter =
            exporter.front_matter_markdown(&self.common.page_id, &self.mapping.to_mapping())?;
        output.payload(&front_matter);
        Ok(())
    }
}
