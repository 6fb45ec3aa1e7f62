//! Zenpress CLI - Notion to Zenn markdown exporter.
//!
//! Provides commands for:
//! - `export`: Render a page as a complete Zenn article
//! - `front-matter`: Render the front matter block only
//! - `images`: List image URLs embedded in a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExportArgs, FrontMatterArgs, ImagesArgs};
use output::Output;

/// Zenpress - Notion to Zenn markdown exporter.
#[derive(Parser)]
#[command(name = "zenpress", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page as a complete Zenn article.
    Export(ExportArgs),
    /// Render the front matter block only.
    FrontMatter(FrontMatterArgs),
    /// List image URLs embedded in a page.
    Images(ImagesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Export(args) => args.execute(&output),
        Commands::FrontMatter(args) => args.execute(&output),
        Commands::Images(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
