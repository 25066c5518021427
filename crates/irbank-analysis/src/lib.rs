//! irbank Analysis - impulse-response capture and calibration
//!
//! A capture session has two halves that never run together:
//!
//! 1. [`ImpulseSynthesizer`] writes a test signal: a train of single-sample
//!    impulses, one interval apart, with a silent interval at each end.
//! 2. The signal is played through the system under test and recorded.
//! 3. [`ResponseExtractor`] cuts the recording back into one response per
//!    impulse, keeps the first `ir_len` samples of each, divides out the
//!    excitation gain, and joins them into a [`CalibratedIrBank`].
//!
//! Both halves are built from the same [`CaptureConfig`], and both derive
//! their gains from the same [`AmplitudeProfile`]: a sweep of dB buckets from
//! `min_db` up to 0 dB, played once with negative polarity and once with
//! positive polarity.
//!
//! ## Example
//!
//! ```rust
//! use irbank_analysis::{ImpulseSynthesizer, ResponseExtractor};
//! use irbank_config::CaptureConfig;
//!
//! let config = CaptureConfig {
//!     num_impulses: 4,
//!     sample_rate: 8,
//!     min_db: -20.0,
//!     ir_len: 4,
//!     ..CaptureConfig::default()
//! };
//!
//! let signal = ImpulseSynthesizer::new(&config)?.synthesize()?;
//! assert_eq!(signal.nonzero_positions(), vec![8, 16, 24, 32]);
//!
//! // A perfect capture hands the test signal straight back.
//! let extraction = ResponseExtractor::new(&config)?.extract(&signal)?;
//! assert!(extraction.diagnostics.is_empty());
//! for ir in extraction.bank.iter() {
//!     assert!((ir[0] - 1.0).abs() < 1e-3);
//! }
//! # Ok::<(), irbank_analysis::AnalysisError>(())
//! ```

mod error;
pub mod extract;
pub mod profile;
pub mod synth;

pub use error::{AnalysisError, Result};
pub use extract::{CalibratedIrBank, Diagnostic, Extraction, IrMatrix, ResponseExtractor};
pub use profile::AmplitudeProfile;
pub use synth::{ImpulseSynthesizer, impulse_train};

pub use irbank_config::{CaptureConfig, LengthPolicy};
