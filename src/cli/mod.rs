//! Command-line interface for sms-segments
//!
//! Provides `count` and `batch` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod batch;
mod count;
mod utils;

/// Billed length and segment counter for SMS message templates
#[derive(Parser)]
#[command(name = "sms-segments")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure a single message template
    Count(count::CountArgs),

    /// Measure one template per file
    Batch(batch::BatchArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence when set; otherwise --verbose picks DEBUG over WARN.
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Count(args) => count::run(args),
        Commands::Batch(args) => batch::run(args),
    }
}
