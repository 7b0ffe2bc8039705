//! Apply command
//!
//! Usage: carlot apply <SCRIPT> [--seed <FILE>] [--output <FILE>]
//!
//! The script is a YAML list of commands:
//!
//! ```yaml
//! - op: vehicle_add
//!   brandId: "1"
//!   modelId: "1"
//!   price: 15000
//!   year: 2018
//! - op: vehicle_delete
//!   vehicleId: "3"
//! ```
//!
//! A failing command is reported and skipped; the inventory is left as it was
//! before that command and the script carries on.

use super::{emit, SourceArgs};
use carlot_core::render::render_inventory;
use carlot_core::{log_op_end, log_op_start, Applied, Command};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Path to the command script (YAML list)
    pub script: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Brand ID to filter the final table by
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Output file path for the final table (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute apply command
pub fn execute(args: ApplyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cars = args.source.load()?;

    let script = std::fs::read_to_string(&args.script)
        .map_err(|e| format!("cannot read script {}: {}", args.script.display(), e))?;
    let commands: Vec<Command> = serde_yaml::from_str(&script)?;

    log_op_start!("cli_apply", command_count = commands.len());
    let start = Instant::now();

    let mut failed = 0usize;
    for cmd in commands {
        let op = cmd.op_name();
        match cars.execute(cmd) {
            Ok(applied) => println!("✓ {}", describe(&applied)),
            Err(e) => {
                failed += 1;
                println!("✗ {}: {}", op, e);
            }
        }
    }

    log_op_end!(
        "cli_apply",
        duration_ms = start.elapsed().as_millis() as u64,
        failed = failed
    );

    if failed > 0 {
        println!("{} command(s) failed", failed);
    }
    println!();

    let table = render_inventory(&cars, args.brand.as_deref())?;
    emit(&table, args.output.as_deref())
}

fn describe(applied: &Applied) -> String {
    match applied {
        Applied::Added { vehicle_id } => format!("Added vehicle {}", vehicle_id),
        Applied::Updated { vehicle_id } => format!("Updated vehicle {}", vehicle_id),
        Applied::Deleted {
            vehicle_id,
            removed: true,
        } => format!("Deleted vehicle {}", vehicle_id),
        Applied::Deleted {
            vehicle_id,
            removed: false,
        } => format!("No vehicle {} to delete", vehicle_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_reports_noop_delete() {
        let applied = Applied::Deleted {
            vehicle_id: "v9".to_string(),
            removed: false,
        };
        assert_eq!(describe(&applied), "No vehicle v9 to delete");
    }
}
