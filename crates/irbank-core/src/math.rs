//! Level conversions and measurements.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Measurements
//!
//! - [`peak`] / [`peak_db`] - Maximum absolute sample value
//! - [`rms`] / [`rms_db`] - Root mean square level

/// Level reported for silence or non-positive input, in dB.
pub const SILENCE_DB: f64 = -120.0;

/// Convert decibels to linear gain.
///
/// # Arguments
/// * `db` - Value in decibels
///
/// # Returns
/// Linear gain value (e.g., 0 dB → 1.0, -6 dB → 0.5, +6 dB → 2.0)
///
/// # Example
/// ```rust
/// use irbank_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
/// assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Convert linear gain to decibels.
///
/// Non-positive input maps to [`SILENCE_DB`].
///
/// # Example
/// ```rust
/// use irbank_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 1e-12);
/// assert!((linear_to_db(0.5) - (-6.0206)).abs() < 1e-3);
/// ```
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    if linear <= 0.0 {
        SILENCE_DB
    } else {
        (20.0 * linear.log10()).max(SILENCE_DB)
    }
}

/// Compute peak level (maximum absolute value).
pub fn peak(signal: &[f64]) -> f64 {
    signal.iter().map(|x| x.abs()).fold(0.0, f64::max)
}

/// Compute peak level in dB.
pub fn peak_db(signal: &[f64]) -> f64 {
    linear_to_db(peak(signal))
}

/// Compute RMS (Root Mean Square) level of a signal.
///
/// Returns RMS value in linear scale (not dB).
pub fn rms(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = signal.iter().map(|&x| x * x).sum();
    (sum_sq / signal.len() as f64).sqrt()
}

/// Compute RMS level in dB.
pub fn rms_db(signal: &[f64]) -> f64 {
    linear_to_db(rms(signal))
}
