//! Subcommand implementations and the arguments they share

pub mod apply;
pub mod brands;
pub mod list;

use carlot_core::CarCollection;
use carlot_store::seed::{default_seed, load_collection_file, load_store};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// Where the initial inventory comes from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Seed YAML file (default: the built-in inventory)
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the collection from the seed file, or the built-in inventory
    pub fn load(&self) -> carlot_store::Result<CarCollection> {
        match &self.seed {
            Some(path) => load_collection_file(path),
            None => Ok(CarCollection::new(load_store(default_seed()?)?)),
        }
    }
}

/// Output encoding for read commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

/// Write to a file when a path is given, otherwise to stdout
pub fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        std::fs::write(output_path, content)?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}
