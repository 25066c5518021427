//! Impulse-train generation command.

use super::common::CaptureArgs;
use clap::Args;
use irbank_analysis::ImpulseSynthesizer;
use irbank_io::write_pcm;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    capture: CaptureArgs,

    /// Also write the effective capture config here, for use with `process`
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = args.capture.resolve()?;
    let synth = ImpulseSynthesizer::new(&config)?;
    let signal = synth.synthesize()?;

    println!(
        "Generating {} impulses, {} s apart, {} dB to 0 dB",
        config.num_impulses, config.spacing_secs, config.min_db
    );
    println!(
        "  {} samples, {} Hz, {}, {:.2}s",
        signal.len(),
        signal.sample_rate,
        signal.depth,
        signal.duration_secs()
    );

    println!("Writing {}...", args.output.display());
    write_pcm(&args.output, &signal)?;

    if let Some(path) = &args.save_config {
        config.save(path)?;
        println!("Saved capture config to {}", path.display());
    }

    println!("Done!");
    Ok(())
}
