//! CarLot CLI
//!
//! Command-line interface for the vehicle inventory

use carlot_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "carlot")]
#[command(about = "CarLot - Vehicle inventory with brand and model lookups", long_about = None)]
struct Cli {
    /// Log output format (written to stderr; filter with RUST_LOG)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Dev)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable
    Dev,
    /// JSON lines
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the vehicle table, optionally filtered by brand
    List(commands::list::ListArgs),
    /// Print the brand selector options
    Brands(commands::brands::BrandsArgs),
    /// Apply a YAML script of vehicle commands and render the result
    Apply(commands::apply::ApplyArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Dev => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Brands(args) => commands::brands::execute(args),
        Commands::Apply(args) => commands::apply::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
