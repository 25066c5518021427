//! The capture configuration shared by generation and extraction.

use irbank_core::BitDepth;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{
    self, ValidationError, ValidationResult, validate_impulse_count, validate_interval,
    validate_ir_len, validate_min_db, validate_quietest_impulse, validate_signal_len,
};

/// What extraction does when a recording is not the expected length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Keep going: report a diagnostic and keep every impulse whose response is complete.
    #[default]
    Truncate,
    /// Refuse the recording.
    Strict,
}

/// Parameters of one impulse-response capture session.
///
/// # TOML Format
///
/// ```toml
/// num_impulses = 32
/// spacing_secs = 1.0
/// sample_rate = 48000
/// min_db = -60.0
/// ir_len = 128
/// bit_depth = "int16"
/// length_policy = "truncate"
/// ```
///
/// Every field is optional in the file and falls back to the default above.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Number of impulses in the test signal. Must be even.
    pub num_impulses: usize,
    /// Seconds between consecutive impulses, also the padding at each end.
    pub spacing_secs: f64,
    /// Sample rate of the test signal and the expected recording, in Hz.
    pub sample_rate: u32,
    /// Level of the quietest excitation bucket, in dB. Must be negative.
    pub min_db: f64,
    /// Samples kept from the start of each extracted response.
    pub ir_len: usize,
    /// Integer format of the generated test signal.
    pub bit_depth: BitDepth,
    /// Handling of recordings whose length does not match.
    pub length_policy: LengthPolicy,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            num_impulses: 32,
            spacing_secs: 1.0,
            sample_rate: 48000,
            min_db: -60.0,
            ir_len: 128,
            bit_depth: BitDepth::Int16,
            length_policy: LengthPolicy::Truncate,
        }
    }
}

impl CaptureConfig {
    /// Samples between consecutive impulses: `round(spacing_secs * sample_rate)`.
    pub fn interval_samples(&self) -> usize {
        (self.spacing_secs * self.sample_rate as f64).round() as usize
    }

    /// Length of the synthesized test signal, padding included.
    ///
    /// Saturates on unvalidated configs.
    pub fn total_samples(&self) -> usize {
        self.num_impulses
            .saturating_add(2)
            .saturating_mul(self.interval_samples())
    }

    /// Length of a recording once the padding on both ends is stripped.
    pub fn expected_payload(&self) -> usize {
        self.num_impulses.saturating_mul(self.interval_samples())
    }

    /// Length of the calibrated IR bank.
    pub fn bank_len(&self) -> usize {
        self.num_impulses.saturating_mul(self.ir_len)
    }

    /// Check every field, reporting all violations together.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        let count = validate_impulse_count(self.num_impulses);
        let level = validate_min_db(self.min_db);
        match (count, level) {
            (Ok(()), Ok(())) => {
                if let Err(e) =
                    validate_quietest_impulse(self.min_db, self.num_impulses, self.bit_depth)
                {
                    errors.push(e);
                }
            }
            (count, level) => errors.extend(count.err().into_iter().chain(level.err())),
        }
        match validate_interval(self.spacing_secs, self.sample_rate) {
            Ok(interval) => {
                if let Err(e) = validate_signal_len(self.num_impulses, interval) {
                    errors.push(e);
                }
                if let Err(e) = validate_ir_len(self.ir_len, interval) {
                    errors.push(e);
                }
            }
            Err(e) => {
                errors.push(e);
                if self.ir_len == 0 {
                    errors.push(ValidationError::ZeroIrLen);
                }
            }
        }

        validation::collect(errors)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the config to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_parent(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write(path, e))?;
        Ok(())
    }

    /// Convert the config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
