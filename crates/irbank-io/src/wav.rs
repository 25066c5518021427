//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use irbank_core::{BitDepth, PcmBuffer};
use std::path::Path;

fn pcm_spec(sample_rate: u32, depth: BitDepth) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: depth.bits(),
        sample_format: SampleFormat::Int,
    }
}

/// Read a mono integer PCM WAV file.
///
/// Float files and multi-channel files are rejected rather than converted.
///
/// # Example
/// ```ignore
/// let recording = read_pcm("recorded.wav")?;
/// println!("Loaded {} samples at {} Hz", recording.len(), recording.sample_rate);
/// ```
pub fn read_pcm<P: AsRef<Path>>(path: P) -> Result<PcmBuffer> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit float (integer PCM required)",
            spec.bits_per_sample
        )));
    }
    if spec.channels != 1 {
        return Err(Error::UnsupportedChannels(spec.channels));
    }
    let depth = BitDepth::from_bits(spec.bits_per_sample).ok_or_else(|| {
        Error::UnsupportedFormat(format!("{}-bit integer PCM", spec.bits_per_sample))
    })?;

    let samples = reader
        .into_samples::<i32>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        depth = %depth,
        "read PCM WAV"
    );

    Ok(PcmBuffer::new(spec.sample_rate, depth, samples))
}

/// Write a mono integer PCM WAV file at the buffer's rate and depth.
///
/// # Example
/// ```ignore
/// let buffer = PcmBuffer::silence(48000, BitDepth::Int16, 48000);
/// write_pcm("silence.wav", &buffer)?;
/// ```
pub fn write_pcm<P: AsRef<Path>>(path: P, buffer: &PcmBuffer) -> Result<()> {
    let mut writer = WavWriter::create(path, pcm_spec(buffer.sample_rate, buffer.depth))?;

    match buffer.depth {
        BitDepth::Int8 => {
            for &sample in &buffer.samples {
                writer.write_sample(sample as i8)?;
            }
        }
        BitDepth::Int16 => {
            for &sample in &buffer.samples {
                writer.write_sample(sample as i16)?;
            }
        }
        BitDepth::Int24 | BitDepth::Int32 => {
            for &sample in &buffer.samples {
                writer.write_sample(sample)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

/// Write mono samples as a 32-bit IEEE float WAV file.
///
/// Values are stored as-is, without clamping to `[-1, 1]`.
pub fn write_float<P: AsRef<Path>>(path: P, sample_rate: u32, samples: &[f64]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;

    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }

    writer.finalize()?;
    Ok(())
}
