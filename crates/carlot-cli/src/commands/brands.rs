//! Brands command
//!
//! Usage: carlot brands [--format markdown|json] [--seed <FILE>]

use super::{emit, OutputFormat, SourceArgs};
use carlot_core::render::brand_options;
use clap::Args;

#[derive(Debug, Args)]
pub struct BrandsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

/// Execute brands command
pub fn execute(args: BrandsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cars = args.source.load()?;
    let options = brand_options(&cars);

    let content = match args.format {
        OutputFormat::Markdown => options
            .iter()
            .map(|opt| format!("- `{}` {}\n", opt.value, opt.title))
            .collect::<String>(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&options)?),
    };

    emit(&content, None)
}
