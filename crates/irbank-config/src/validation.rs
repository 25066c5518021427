//! Capture parameter validation.
//!
//! The individual checks are exposed so callers that only need part of a
//! configuration (the amplitude profile only needs `min_db` and the impulse
//! count) can apply the same rules.
//!
//! # Example
//!
//! ```rust
//! use irbank_config::validation::{validate_impulse_count, validate_min_db};
//! use irbank_config::ValidationError;
//!
//! assert!(validate_impulse_count(32).is_ok());
//! assert_eq!(validate_impulse_count(7), Err(ValidationError::OddImpulseCount(7)));
//! assert!(validate_min_db(0.0).is_err());
//! ```

use irbank_core::{BitDepth, db_to_linear};
use thiserror::Error;

/// Quietest excitation level accepted, in dB.
///
/// Extraction divides every response by its excitation gain, so a quieter
/// bucket multiplies the capture noise floor by more than 10^6.
pub const MIN_DB_FLOOR: f64 = -120.0;

/// Longest test signal accepted, in samples (about 6.2 hours at 48 kHz).
///
/// Keeps 32-bit output inside the 4 GiB RIFF size limit.
pub const MAX_SIGNAL_SAMPLES: usize = 1 << 30;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Impulse count is zero.
    #[error("impulse count must be greater than zero")]
    ZeroImpulses,

    /// Impulse count is odd; the profile is split into two equal halves.
    #[error("impulse count must be even, got {0}")]
    OddImpulseCount(usize),

    /// A floating-point field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Minimum level is zero or positive.
    #[error("min_db must be negative, got {0}")]
    MinDbNotNegative(f64),

    /// Minimum level is below [`MIN_DB_FLOOR`].
    #[error("min_db {value} is below the {floor} dB floor")]
    MinDbBelowFloor {
        /// The rejected value.
        value: f64,
        /// The floor it violates.
        floor: f64,
    },

    /// Impulse spacing is zero or negative.
    #[error("spacing_secs must be positive, got {0}")]
    NonPositiveSpacing(f64),

    /// Sample rate is zero.
    #[error("sample_rate must be greater than zero")]
    ZeroSampleRate,

    /// Spacing and sample rate round to an empty interval.
    #[error("spacing of {spacing_secs} s at {sample_rate} Hz rounds to zero samples")]
    EmptyInterval {
        /// Spacing in seconds.
        spacing_secs: f64,
        /// Sample rate in Hz.
        sample_rate: u32,
    },

    /// The test signal would be longer than [`MAX_SIGNAL_SAMPLES`].
    #[error("signal of {samples} samples exceeds the {max}-sample limit")]
    SignalTooLong {
        /// Requested length in samples.
        samples: f64,
        /// The limit it violates.
        max: usize,
    },

    /// The quietest impulse rounds to silence at the output bit depth.
    #[error("quietest impulse at {level_db} dB rounds to zero at {depth}; raise min_db or the bit depth")]
    InaudibleImpulse {
        /// Level of the quietest bucket midpoint, in dB.
        level_db: f64,
        /// Output sample format.
        depth: BitDepth,
    },

    /// Truncation length is zero.
    #[error("ir_len must be greater than zero")]
    ZeroIrLen,

    /// Truncation length exceeds the distance between impulses.
    #[error("ir_len {ir_len} exceeds the {interval}-sample impulse interval")]
    IrLenExceedsInterval {
        /// Requested IR length.
        ir_len: usize,
        /// Samples between consecutive impulses.
        interval: usize,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that an impulse count is non-zero and even.
pub fn validate_impulse_count(num_impulses: usize) -> ValidationResult<()> {
    if num_impulses == 0 {
        Err(ValidationError::ZeroImpulses)
    } else if num_impulses % 2 != 0 {
        Err(ValidationError::OddImpulseCount(num_impulses))
    } else {
        Ok(())
    }
}

/// Check that a minimum level is finite, negative, and not below [`MIN_DB_FLOOR`].
pub fn validate_min_db(min_db: f64) -> ValidationResult<()> {
    if !min_db.is_finite() {
        Err(ValidationError::NonFinite {
            field: "min_db",
            value: min_db,
        })
    } else if min_db >= 0.0 {
        Err(ValidationError::MinDbNotNegative(min_db))
    } else if min_db < MIN_DB_FLOOR {
        Err(ValidationError::MinDbBelowFloor {
            value: min_db,
            floor: MIN_DB_FLOOR,
        })
    } else {
        Ok(())
    }
}

/// Check spacing and sample rate, returning the interval length in samples.
pub fn validate_interval(spacing_secs: f64, sample_rate: u32) -> ValidationResult<usize> {
    if !spacing_secs.is_finite() {
        return Err(ValidationError::NonFinite {
            field: "spacing_secs",
            value: spacing_secs,
        });
    }
    if spacing_secs <= 0.0 {
        return Err(ValidationError::NonPositiveSpacing(spacing_secs));
    }
    if sample_rate == 0 {
        return Err(ValidationError::ZeroSampleRate);
    }
    let raw = (spacing_secs * sample_rate as f64).round();
    if raw > MAX_SIGNAL_SAMPLES as f64 {
        return Err(ValidationError::SignalTooLong {
            samples: raw,
            max: MAX_SIGNAL_SAMPLES,
        });
    }
    let interval = raw as usize;
    if interval == 0 {
        return Err(ValidationError::EmptyInterval {
            spacing_secs,
            sample_rate,
        });
    }
    Ok(interval)
}

/// Check that `num_impulses` impulses plus two padding intervals fit within
/// [`MAX_SIGNAL_SAMPLES`], returning the signal length.
pub fn validate_signal_len(num_impulses: usize, interval: usize) -> ValidationResult<usize> {
    let samples = (num_impulses as f64 + 2.0) * interval as f64;
    if samples > MAX_SIGNAL_SAMPLES as f64 {
        return Err(ValidationError::SignalTooLong {
            samples,
            max: MAX_SIGNAL_SAMPLES,
        });
    }
    Ok((num_impulses + 2) * interval)
}

/// Check that the quietest bucket of a valid profile survives quantization.
///
/// Assumes `num_impulses` and `min_db` already passed their own checks.
pub fn validate_quietest_impulse(
    min_db: f64,
    num_impulses: usize,
    depth: BitDepth,
) -> ValidationResult<()> {
    let step = min_db.abs() / (num_impulses / 2).max(1) as f64;
    let level_db = min_db + 0.5 * step;
    if depth.quantize(db_to_linear(level_db)) == 0 {
        Err(ValidationError::InaudibleImpulse { level_db, depth })
    } else {
        Ok(())
    }
}

/// Check that an IR length fits inside one impulse interval.
pub fn validate_ir_len(ir_len: usize, interval: usize) -> ValidationResult<()> {
    if ir_len == 0 {
        Err(ValidationError::ZeroIrLen)
    } else if ir_len > interval {
        Err(ValidationError::IrLenExceedsInterval { ir_len, interval })
    } else {
        Ok(())
    }
}

/// Collapse a list of failures into a single result.
pub(crate) fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_count() {
        assert_eq!(validate_impulse_count(0), Err(ValidationError::ZeroImpulses));
        assert_eq!(
            validate_impulse_count(3),
            Err(ValidationError::OddImpulseCount(3))
        );
        assert!(validate_impulse_count(2).is_ok());
    }

    #[test]
    fn test_min_db() {
        assert!(validate_min_db(-60.0).is_ok());
        assert!(validate_min_db(MIN_DB_FLOOR).is_ok());
        assert_eq!(
            validate_min_db(0.0),
            Err(ValidationError::MinDbNotNegative(0.0))
        );
        assert!(matches!(
            validate_min_db(-121.0),
            Err(ValidationError::MinDbBelowFloor { .. })
        ));
        assert!(matches!(
            validate_min_db(f64::NEG_INFINITY),
            Err(ValidationError::NonFinite { field: "min_db", .. })
        ));
    }

    #[test]
    fn test_interval_rounds() {
        assert_eq!(validate_interval(1.0, 48000), Ok(48000));
        assert_eq!(validate_interval(0.5, 8), Ok(4));
        assert_eq!(validate_interval(0.0001, 8), Err(ValidationError::EmptyInterval {
            spacing_secs: 0.0001,
            sample_rate: 8,
        }));
        assert_eq!(validate_interval(1.0, 0), Err(ValidationError::ZeroSampleRate));
        assert_eq!(
            validate_interval(-1.0, 8),
            Err(ValidationError::NonPositiveSpacing(-1.0))
        );
    }

    #[test]
    fn test_huge_spacing_is_too_long() {
        assert!(matches!(
            validate_interval(1e15, 48000),
            Err(ValidationError::SignalTooLong { max: MAX_SIGNAL_SAMPLES, .. })
        ));
        assert!(matches!(
            validate_interval(f64::MAX, 48000),
            Err(ValidationError::SignalTooLong { .. })
        ));
    }

    #[test]
    fn test_signal_len() {
        assert_eq!(validate_signal_len(4, 8), Ok(48));
        assert!(matches!(
            validate_signal_len(usize::MAX - 1, 48000),
            Err(ValidationError::SignalTooLong { .. })
        ));
        assert!(matches!(
            validate_signal_len(MAX_SIGNAL_SAMPLES, 1),
            Err(ValidationError::SignalTooLong { .. })
        ));
    }

    #[test]
    fn test_quietest_impulse_must_survive_quantization() {
        // 32 impulses from -120 dB: quietest midpoint -116.25 dB, ~0.05 LSB at 16 bits.
        assert_eq!(
            validate_quietest_impulse(-120.0, 32, BitDepth::Int16),
            Err(ValidationError::InaudibleImpulse {
                level_db: -116.25,
                depth: BitDepth::Int16
            })
        );
        assert!(validate_quietest_impulse(-120.0, 32, BitDepth::Int24).is_ok());
        assert!(validate_quietest_impulse(-60.0, 32, BitDepth::Int16).is_ok());
        assert!(validate_quietest_impulse(-60.0, 32, BitDepth::Int8).is_err());
    }

    #[test]
    fn test_ir_len() {
        assert!(validate_ir_len(128, 48000).is_ok());
        assert!(validate_ir_len(8, 8).is_ok());
        assert_eq!(validate_ir_len(0, 8), Err(ValidationError::ZeroIrLen));
        assert_eq!(
            validate_ir_len(9, 8),
            Err(ValidationError::IrLenExceedsInterval {
                ir_len: 9,
                interval: 8
            })
        );
    }

    #[test]
    fn test_collect() {
        assert_eq!(collect(vec![]), Ok(()));
        assert_eq!(
            collect(vec![ValidationError::ZeroIrLen]),
            Err(ValidationError::ZeroIrLen)
        );
        let err = collect(vec![ValidationError::ZeroIrLen, ValidationError::ZeroSampleRate])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "multiple validation errors: ir_len must be greater than zero; sample_rate must be greater than zero"
        );
    }
}
