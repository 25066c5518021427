//! Error types for synthesis and extraction.

use irbank_config::ValidationError;
use thiserror::Error;

/// Errors produced while building an impulse train or extracting responses.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// The capture parameters are invalid.
    #[error("invalid capture configuration: {0}")]
    Config(#[from] ValidationError),

    /// An impulse would land past the end of the output buffer.
    #[error("impulse {index} at sample {position} falls outside the {len}-sample buffer")]
    ImpulseOutOfRange {
        /// Index of the impulse in the profile.
        index: usize,
        /// Sample position it was meant to occupy.
        position: usize,
        /// Length of the buffer.
        len: usize,
    },

    /// The recording was not made at the configured sample rate.
    #[error("recording is {actual} Hz but the capture is configured for {expected} Hz")]
    SampleRateMismatch {
        /// Configured sample rate.
        expected: u32,
        /// Sample rate of the recording.
        actual: u32,
    },

    /// The recording cannot even hold the padding at both ends.
    #[error("recording has {actual} samples, fewer than the {required} taken by padding")]
    RecordingTooShort {
        /// Samples needed for the lead-in and trail-out.
        required: usize,
        /// Samples in the recording.
        actual: usize,
    },

    /// After stripping padding, not even the first response is complete.
    #[error("recording holds no complete {ir_len}-sample response ({actual} samples after padding)")]
    NoCompleteImpulses {
        /// Samples per response.
        ir_len: usize,
        /// Samples left after stripping padding.
        actual: usize,
    },

    /// More responses were cut than there are excitation gains to undo.
    #[error("{rows} responses but only {gains} excitation gains")]
    ProfileMismatch {
        /// Responses cut from the recording.
        rows: usize,
        /// Gains in the amplitude profile.
        gains: usize,
    },

    /// An impulse rounds to a zero sample at the output bit depth.
    #[error("impulse {index} with gain {gain} quantizes to silence")]
    ImpulseQuantizedToZero {
        /// Index of the impulse in the profile.
        index: usize,
        /// Its linear gain.
        gain: f64,
    },

    /// The recording length is wrong and the policy is strict.
    #[error("recording should be {expected} samples long without padding, but is {actual}")]
    LengthMismatch {
        /// Expected samples after stripping padding.
        expected: usize,
        /// Actual samples after stripping padding.
        actual: usize,
    },
}

/// Convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
