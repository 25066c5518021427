//! Shared CLI helpers used across multiple commands.

use clap::{Args, ValueEnum};
use irbank_config::CaptureConfig;
use irbank_core::BitDepth;
use std::path::PathBuf;

/// Bit depths for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliBitDepth {
    #[value(name = "8")]
    Int8,
    #[value(name = "16")]
    Int16,
    #[value(name = "24")]
    Int24,
    #[value(name = "32")]
    Int32,
}

impl From<CliBitDepth> for BitDepth {
    fn from(d: CliBitDepth) -> Self {
        match d {
            CliBitDepth::Int8 => BitDepth::Int8,
            CliBitDepth::Int16 => BitDepth::Int16,
            CliBitDepth::Int24 => BitDepth::Int24,
            CliBitDepth::Int32 => BitDepth::Int32,
        }
    }
}

/// Capture parameters, layered over a config file and the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct CaptureArgs {
    /// Capture config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of impulses (even)
    #[arg(long)]
    pub num_impulses: Option<usize>,

    /// Seconds between impulses
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Quietest excitation level in dB (negative)
    #[arg(long, allow_hyphen_values = true)]
    pub min_db: Option<f64>,

    /// Samples kept per impulse response
    #[arg(long)]
    pub ir_len: Option<usize>,

    /// Bit depth of the generated signal
    #[arg(long)]
    pub bit_depth: Option<CliBitDepth>,
}

impl CaptureArgs {
    /// Resolve the effective config: file (or defaults), then flag overrides.
    pub fn resolve(&self) -> anyhow::Result<CaptureConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading capture config");
                CaptureConfig::load(path)?
            }
            None => CaptureConfig::default(),
        };

        if let Some(n) = self.num_impulses {
            config.num_impulses = n;
        }
        if let Some(spacing) = self.spacing {
            config.spacing_secs = spacing;
        }
        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(min_db) = self.min_db {
            config.min_db = min_db;
        }
        if let Some(ir_len) = self.ir_len {
            config.ir_len = ir_len;
        }
        if let Some(depth) = self.bit_depth {
            config.bit_depth = depth.into();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = CaptureArgs {
            num_impulses: Some(8),
            min_db: Some(-40.0),
            bit_depth: Some(CliBitDepth::Int24),
            ..CaptureArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.num_impulses, 8);
        assert_eq!(config.min_db, -40.0);
        assert_eq!(config.bit_depth, BitDepth::Int24);
        assert_eq!(config.sample_rate, 48000);
    }

    #[test]
    fn invalid_overrides_fail() {
        let args = CaptureArgs {
            num_impulses: Some(7),
            ..CaptureArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("even"), "got: {err}");
    }
}
