//! Capture configuration for irbank.
//!
//! Impulse generation and response extraction only line up when both sides
//! agree on the impulse count, spacing, and sample rate. [`CaptureConfig`] is
//! the single value both pipelines are built from, so the agreement can be
//! saved next to the generated test signal and checked when the recording
//! comes back.
//!
//! # Features
//!
//! - **Defaults**: 32 impulses, 1 s apart, 48 kHz, -60 dB quietest bucket,
//!   128-sample IRs, 16-bit PCM
//! - **Persistence**: Load and save configs as TOML
//! - **Validation**: Every rule checked at once, with all violations reported
//!
//! # Example
//!
//! ```rust,no_run
//! use irbank_config::{CaptureConfig, LengthPolicy};
//!
//! let config = CaptureConfig {
//!     num_impulses: 16,
//!     length_policy: LengthPolicy::Strict,
//!     ..CaptureConfig::default()
//! };
//! config.validate().unwrap();
//! config.save("bedroom.toml").unwrap();
//!
//! let loaded = CaptureConfig::load("bedroom.toml").unwrap();
//! assert_eq!(loaded, config);
//! ```

mod capture;
mod error;

/// Capture parameter validation.
pub mod validation;

pub use capture::{CaptureConfig, LengthPolicy};
pub use error::ConfigError;
pub use validation::{MAX_SIGNAL_SAMPLES, MIN_DB_FLOOR, ValidationError, ValidationResult};
