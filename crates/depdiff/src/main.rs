//! depdiff - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `depdiff format` | Convert a tool's native export into canonical documents |
//! | `depdiff compare` | Compare two canonical datasets (entity or dependency) |
//! | `depdiff comparators` | List registered comparators and format adapters |
//! | `depdiff config` | Print or save the effective configuration |
//!
//! The comparison summary goes to stdout; logs go to stderr.

// Force-link depdiff-providers to ensure linkme registrations are included
extern crate depdiff_providers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use depdiff_application::registry::{list_comparators, list_format_adapters};
use depdiff_domain::value_objects::{CompareKind, ToolKind};
use depdiff_infrastructure::logging::init_logging;
use depdiff_infrastructure::{
    AppConfig, CompareRequest, ComparisonRunner, ConfigLoader, FormatRequest,
};

/// Command line interface for depdiff
#[derive(Parser, Debug)]
#[command(name = "depdiff")]
#[command(about = "Compare entities and dependencies reported by static-analysis tools")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two canonical datasets
    Compare {
        /// Tool that produced the left dataset
        #[arg(long)]
        left_tool: ToolKind,
        /// Canonical document of the left dataset
        #[arg(long)]
        left: PathBuf,
        /// Tool that produced the right dataset
        #[arg(long)]
        right_tool: ToolKind,
        /// Canonical document of the right dataset
        #[arg(long)]
        right: PathBuf,
        /// `entity` or `dependency`
        #[arg(long, default_value = "entity")]
        kind: CompareKind,
        /// Report destination
        #[arg(short, long)]
        output: PathBuf,
        /// Report of a previous entity run (dependency runs only)
        #[arg(long)]
        equivalence: Option<PathBuf>,
    },

    /// Convert a native export into canonical documents
    Format {
        /// Tool that produced the export
        #[arg(long)]
        tool: ToolKind,
        /// Native entity export
        #[arg(long)]
        entity_input: Option<PathBuf>,
        /// Native dependency export
        #[arg(long)]
        dependency_input: Option<PathBuf>,
        /// Project name written into the documents
        #[arg(long)]
        project: String,
        /// Directory receiving the canonical documents
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// List registered comparators and format adapters
    Comparators,

    /// Print the effective configuration as TOML, or save it to a file
    Config {
        /// Destination file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    loader.load().context("Failed to load configuration")
}

/// Load configuration, install logging and build the runner
fn prepare(config_path: Option<PathBuf>) -> Result<ComparisonRunner> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;
    ComparisonRunner::new(config).context("Failed to prepare the comparison runner")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            left_tool,
            left,
            right_tool,
            right,
            kind,
            output,
            equivalence,
        } => {
            let runner = prepare(cli.config)?;
            let request = CompareRequest {
                left_tool,
                left,
                right_tool,
                right,
                kind,
                output,
                equivalence,
            };
            let summary = runner.compare(&request)?;
            println!("{summary}");
        }
        Commands::Format {
            tool,
            entity_input,
            dependency_input,
            project,
            output_dir,
        } => {
            let runner = prepare(cli.config)?;
            let request = FormatRequest {
                tool,
                entity_input,
                dependency_input,
                project,
                output_dir,
            };
            let outcome = runner.format(&request)?;
            for path in &outcome.written {
                println!("{}", path.display());
            }
        }
        Commands::Comparators => {
            for (label, description) in list_comparators() {
                println!("{label:<32} {description}");
            }
            for (tool, description) in list_format_adapters() {
                println!("{:<32} {description}", format!("format:{tool}"));
            }
        }
        Commands::Config { output } => {
            let config = load_config(cli.config)?;
            match output {
                Some(path) => ConfigLoader::save_to_file(&config, &path)
                    .with_context(|| format!("Failed to save configuration to {}", path.display()))?,
                None => print!("{}", ConfigLoader::to_toml(&config)?),
            }
        }
    }
    Ok(())
}
