//! irbank CLI - generate impulse trains and calibrate recorded IR banks.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "irbank")]
#[command(author, version, about = "Impulse-response bank capture and calibration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an impulse-train test signal
    Generate(commands::generate::GenerateArgs),

    /// Calibrate a recorded impulse train into an IR bank
    Process(commands::process::ProcessArgs),

    /// Create or inspect capture configs
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout stays clean for reports.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Process(args) => commands::process::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
