//! Impulse-train synthesis.
//!
//! The test signal is `num_impulses + 2` intervals of silence with impulse
//! `i` written at sample `(i + 1) * interval`. The first and last intervals
//! stay silent to absorb playback latency and the tail of the final response.
//!
//! ```text
//! |  pad  | imp 0 | imp 1 |  ...  | imp N-1 |  pad  |
//! ^0      ^1*I    ^2*I                       ^(N+1)*I
//! ```

use irbank_config::CaptureConfig;
use irbank_core::{BitDepth, PcmBuffer};

use crate::profile::AmplitudeProfile;
use crate::{AnalysisError, Result};

/// Builds the impulse-train test signal for a capture session.
#[derive(Debug, Clone)]
pub struct ImpulseSynthesizer {
    config: CaptureConfig,
    profile: AmplitudeProfile,
}

impl ImpulseSynthesizer {
    /// Create a synthesizer, validating the config first.
    pub fn new(config: &CaptureConfig) -> Result<Self> {
        config.validate()?;
        let profile = AmplitudeProfile::from_config(config)?;
        Ok(Self {
            config: config.clone(),
            profile,
        })
    }

    /// The config this synthesizer was built from.
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Excitation gains, one per impulse.
    pub fn profile(&self) -> &AmplitudeProfile {
        &self.profile
    }

    /// Sample position of every impulse.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        let interval = self.config.interval_samples();
        (0..self.profile.len()).map(move |i| (i + 1) * interval)
    }

    /// Render the test signal at the configured rate and bit depth.
    pub fn synthesize(&self) -> Result<PcmBuffer> {
        let len = self.config.total_samples();
        let interval = self.config.interval_samples();
        let samples = impulse_train(len, interval, &self.profile, self.config.bit_depth)?;

        tracing::debug!(
            impulses = self.profile.len(),
            interval,
            len,
            depth = %self.config.bit_depth,
            "synthesized impulse train"
        );

        Ok(PcmBuffer::new(
            self.config.sample_rate,
            self.config.bit_depth,
            samples,
        ))
    }
}

/// Write one quantized impulse per profile gain into `len` samples of silence.
///
/// Impulse `i` goes to sample `(i + 1) * interval` with value
/// `round(gain * depth.max())`. A position past the end of the buffer, or a
/// gain that rounds to zero, is an error rather than a dropped impulse.
pub fn impulse_train(
    len: usize,
    interval: usize,
    profile: &AmplitudeProfile,
    depth: BitDepth,
) -> Result<Vec<i32>> {
    let mut samples = vec![0i32; len];

    for (index, gain) in profile.iter().enumerate() {
        let position = (index + 1) * interval;
        let slot = samples
            .get_mut(position)
            .ok_or(AnalysisError::ImpulseOutOfRange {
                index,
                position,
                len,
            })?;
        *slot = depth.quantize(gain);
        if *slot == 0 {
            return Err(AnalysisError::ImpulseQuantizedToZero { index, gain });
        }
    }

    Ok(samples)
}
