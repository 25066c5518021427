//! Recorded impulse-train calibration command.

use super::common::CaptureArgs;
use clap::Args;
use irbank_analysis::{LengthPolicy, ResponseExtractor};
use irbank_io::{read_pcm, write_float};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Recorded WAV file (mono integer PCM)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file for the calibrated IR bank (32-bit float)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    capture: CaptureArgs,

    /// Fail instead of truncating when the recording is the wrong length
    #[arg(long)]
    strict: bool,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let mut config = args.capture.resolve()?;
    if args.strict {
        config.length_policy = LengthPolicy::Strict;
    }

    println!("Reading {}...", args.input.display());
    let recording = read_pcm(&args.input)?;
    println!(
        "  {} samples, {} Hz, {}, {:.2}s",
        recording.len(),
        recording.sample_rate,
        recording.depth,
        recording.duration_secs()
    );

    let extractor = ResponseExtractor::new(&config)?;
    let extraction = extractor.extract(&recording)?;
    let bank = &extraction.bank;

    println!(
        "Extracted {} IRs of {} samples ({} warning(s))",
        bank.num_irs(),
        bank.ir_len(),
        extraction.diagnostics.len()
    );

    println!("\nPeak levels:");
    for ((i, peak), gain) in bank
        .peaks_db()
        .into_iter()
        .enumerate()
        .zip(extractor.profile().iter())
    {
        println!("  IR {i:>3}  excitation {gain:+.4}  peak {peak:>7.1} dB");
    }

    println!("\nWriting {}...", args.output.display());
    write_float(&args.output, bank.sample_rate(), bank.samples())?;
    println!("Done!");

    Ok(())
}
