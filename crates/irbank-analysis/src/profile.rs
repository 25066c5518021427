//! Excitation gains for the impulse train.
//!
//! The dB range from `min_db` to 0 dB is split into `N/2` equal buckets and
//! each impulse is played at a bucket midpoint, so no impulse sits at exactly
//! `min_db` or at full scale. The sweep runs twice: first with negative
//! polarity, then positive, quietest to loudest both times.
//!
//! ```text
//! N = 4, min_db = -20:   step = 10 dB, midpoints = [-15, -5] dB
//! gains = [-0.178, -0.562, +0.178, +0.562]
//! ```

use irbank_config::CaptureConfig;
use irbank_config::validation::{validate_impulse_count, validate_min_db};
use irbank_core::db_to_linear;

use crate::Result;

/// Signed linear gain for every impulse in a capture.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeProfile {
    levels_db: Vec<f64>,
    gains: Vec<f64>,
}

impl AmplitudeProfile {
    /// Build the profile for `num_impulses` impulses spanning `min_db..0` dB.
    ///
    /// `num_impulses` must be even and non-zero; `min_db` must be negative and
    /// no quieter than [`irbank_config::MIN_DB_FLOOR`].
    pub fn new(min_db: f64, num_impulses: usize) -> Result<Self> {
        validate_impulse_count(num_impulses)?;
        validate_min_db(min_db)?;

        let half = num_impulses / 2;
        let step = min_db.abs() / half as f64;

        let levels_db: Vec<f64> = (0..half)
            .map(|k| min_db + (k as f64 + 0.5) * step)
            .collect();

        let magnitudes: Vec<f64> = levels_db.iter().map(|&db| db_to_linear(db)).collect();
        let gains = magnitudes
            .iter()
            .map(|&g| -g)
            .chain(magnitudes.iter().copied())
            .collect();

        Ok(Self { levels_db, gains })
    }

    /// Build the profile described by a capture config.
    pub fn from_config(config: &CaptureConfig) -> Result<Self> {
        Self::new(config.min_db, config.num_impulses)
    }

    /// All gains, negative half first.
    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    /// Gain of impulse `index`.
    pub fn gain(&self, index: usize) -> Option<f64> {
        self.gains.get(index).copied()
    }

    /// Bucket midpoints in dB, quietest first. Shared by both polarities.
    pub fn decibels(&self) -> &[f64] {
        &self.levels_db
    }

    /// Number of impulses.
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    /// Always false for a constructed profile; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    /// Iterate over the gains.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.gains.iter().copied()
    }
}
