//! WAV file adapter for irbank.
//!
//! This crate provides:
//!
//! - **Integer PCM I/O**: [`read_pcm`] and [`write_pcm`] for test signals and
//!   recordings, always mono
//! - **Float output**: [`write_float`] for calibrated IR banks, which exceed
//!   integer full scale
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use irbank_io::{read_pcm, write_float};
//!
//! let recording = read_pcm("recorded_ir_bedroom.wav")?;
//! let bank: Vec<f64> = calibrate(&recording);
//! write_float("bedroom.wav", recording.sample_rate, &bank)?;
//! ```

mod wav;

pub use wav::{read_pcm, write_float, write_pcm};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file's sample format cannot be handled.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// The file is not mono.
    #[error("Unsupported channel count: {0} (only mono is supported)")]
    UnsupportedChannels(u16),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
