//! List command
//!
//! Usage: carlot list [--brand <ID>] [--format markdown|json] [--seed <FILE>] [--output <FILE>]

use super::{emit, OutputFormat, SourceArgs};
use carlot_core::render::{inventory_view, render_inventory};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Brand ID to filter by ("0" lists every brand)
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute list command
pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cars = args.source.load()?;

    let content = match args.format {
        OutputFormat::Markdown => render_inventory(&cars, args.brand.as_deref())?,
        OutputFormat::Json => {
            let view = inventory_view(&cars, args.brand.as_deref())?;
            format!("{}\n", serde_json::to_string_pretty(&view)?)
        }
    };

    emit(&content, args.output.as_deref())
}
