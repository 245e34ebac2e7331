//! PRNG Lab CLI - dataset generation for generator quality studies
//!
//! # Commands
//!
//! - `prng-lab generate` - Run the dataset suite and write CSV files
//! - `prng-lab engines` - List the registered engine kinds
//! - `prng-lab summary` - Compare the exact and approximate normal samplers
//!
//! # Architecture
//!
//! Thin orchestration over `prng_quality`: configuration and CSV export live
//! here, every statistical transform lives in the core crate.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod export;

pub use error::{CliError, Result};

use config::LabConfig;

/// PRNG quality lab CLI
#[derive(Parser)]
#[command(name = "prng-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "prng_lab.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dataset suite and write one CSV file per dataset
    Generate {
        /// Only generate this dataset (file stem or group/file)
        #[arg(long)]
        only: Option<String>,

        /// Output directory (overrides the configuration)
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// List registered engine kinds and their output ranges
    Engines,

    /// Print mean, variance and tail mass of both normal samplers
    Summary {
        /// Engine kind (see `prng-lab engines`, e.g. mersenne, jsf64, xorshift64star)
        #[arg(short, long)]
        engine: Option<String>,

        /// Number of samples per strategy
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Engine seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    let config = LabConfig::load(Path::new(&cli.config))?;

    match cli.command {
        Commands::Generate { only, output_dir } => {
            let written = commands::generate::run(&config, only.as_deref(), output_dir.as_deref())?;
            for path in &written {
                info!("  {}", path.display());
            }
            Ok(())
        }
        Commands::Engines => commands::engines::run(),
        Commands::Summary {
            engine,
            count,
            seed,
        } => commands::summary::run(&config.summary, engine.as_deref(), count, seed),
    }
}
