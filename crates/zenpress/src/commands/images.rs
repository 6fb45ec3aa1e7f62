//! Images command: list embedded image URLs.

use clap::Args;
use zenpress_article::Exporter;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the images command.
#[derive(Args)]
pub(crate) struct ImagesArgs {
    #[command(flatten)]
    common: CommonArgs,
}

impl ImagesArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let exporter = Exporter::new(&self.common.token);
        let urls = exporter.list_image_urls(&self.common.page_id)?;

        for url in urls {
            output.payload(&url);
        }
        Ok(())
    }
}
