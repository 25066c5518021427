//! Capture config management command.

use super::common::CaptureArgs;
use clap::{Args, Subcommand};
use irbank_config::CaptureConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a config file from the defaults plus any overrides
    Init {
        /// Output TOML file
        #[arg(value_name = "FILE")]
        output: PathBuf,

        #[command(flatten)]
        capture: CaptureArgs,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print a config (the defaults if no file is given) with derived lengths
    Show {
        /// TOML file to show
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Init {
            output,
            capture,
            force,
        } => {
            if output.exists() && !force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite.",
                    output.display()
                );
            }
            let config = capture.resolve()?;
            config.save(&output)?;
            println!("Wrote {}", output.display());
            Ok(())
        }
        ConfigCommand::Show { file } => {
            let config = match file {
                Some(path) => CaptureConfig::load(&path)?,
                None => CaptureConfig::default(),
            };
            print!("{}", config.to_toml()?);

            println!();
            match config.validate() {
                Ok(()) => {
                    println!("# interval:      {} samples", config.interval_samples());
                    println!("# signal length: {} samples", config.total_samples());
                    println!("# bank length:   {} samples", config.bank_len());
                }
                Err(e) => println!("# invalid: {e}"),
            }
            Ok(())
        }
    }
}
