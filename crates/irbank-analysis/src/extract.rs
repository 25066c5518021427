//! Response extraction and calibration.
//!
//! A recording of the impulse train is cut back into per-impulse responses:
//!
//! 1. Normalize integer samples to `[-1, 1]` by the depth's full scale
//! 2. Strip one interval of padding from each end
//! 3. Check the remaining length against `num_impulses * interval`; on a
//!    mismatch either fail or carry on with what was recorded, per [`LengthPolicy`]
//! 4. Cut one row per impulse: row `i` is the first `ir_len` samples from
//!    offset `i * interval`. Impulses whose `ir_len` samples were not all
//!    recorded are dropped from the end.
//! 5. Divide row `i` by the excitation gain of impulse `i`
//! 6. Concatenate the rows in order
//!
//! Step 5 is not guarded: the quietest buckets amplify the capture noise
//! floor by up to `10^(-min_db / 20)`.

use std::fmt;

use irbank_config::{CaptureConfig, LengthPolicy};
use irbank_core::{PcmBuffer, peak_db};

use crate::profile::AmplitudeProfile;
use crate::{AnalysisError, Result};

/// A recoverable problem found during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The recording, minus padding, was not `expected` samples long. Extra
    /// samples were ignored and incomplete trailing responses dropped.
    LengthMismatch {
        /// Expected samples after stripping padding.
        expected: usize,
        /// Actual samples after stripping padding.
        actual: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LengthMismatch { expected, actual } => write!(
                f,
                "recorded impulse response file wrong length: ignoring the padding on either side, \
                 it should be {expected} samples long, but is instead {actual} samples long"
            ),
        }
    }
}

/// Responses laid out one per row, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IrMatrix {
    data: Vec<f64>,
    row_len: usize,
}

impl IrMatrix {
    /// Split `data` into rows of `row_len` samples.
    ///
    /// Returns `None` unless `row_len` is non-zero and divides `data.len()`.
    pub fn from_flat(data: Vec<f64>, row_len: usize) -> Option<Self> {
        if row_len == 0 || data.len() % row_len != 0 {
            return None;
        }
        Some(Self { data, row_len })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.data.len() / self.row_len
    }

    /// Samples per row.
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Row `index`, if present.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.data.chunks_exact(self.row_len).nth(index)
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.row_len)
    }

    /// Cut a row of `row_len` samples every `stride` samples of `data`,
    /// keeping only rows that lie entirely inside it.
    ///
    /// Returns `None` unless `0 < row_len <= stride`.
    pub fn gather(data: &[f64], stride: usize, row_len: usize) -> Option<Self> {
        if row_len == 0 || row_len > stride {
            return None;
        }
        let data = data
            .chunks(stride)
            .filter(|chunk| chunk.len() >= row_len)
            .flat_map(|chunk| &chunk[..row_len])
            .copied()
            .collect();
        Some(Self { data, row_len })
    }

    /// Divide every sample of row `i` by `gains[i]`.
    ///
    /// Returns `None` if there are more rows than gains.
    pub fn rescale(&self, gains: &[f64]) -> Option<IrMatrix> {
        if self.num_rows() > gains.len() {
            return None;
        }
        let data = self
            .rows()
            .zip(gains)
            .flat_map(|(row, &gain)| row.iter().map(move |&s| s / gain))
            .collect();
        Some(IrMatrix {
            data,
            row_len: self.row_len,
        })
    }

    /// Flatten back into one sequence, rows in order.
    pub fn into_flat(self) -> Vec<f64> {
        self.data
    }
}

/// Gain-normalized impulse responses placed back to back.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedIrBank {
    samples: Vec<f64>,
    ir_len: usize,
    sample_rate: u32,
}

impl CalibratedIrBank {
    /// All samples, one IR after another.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Take the samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Samples per IR.
    pub fn ir_len(&self) -> usize {
        self.ir_len
    }

    /// Number of IRs.
    pub fn num_irs(&self) -> usize {
        self.samples.len() / self.ir_len
    }

    /// Sample rate inherited from the recording.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the bank is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// IR `index`, if present.
    pub fn ir(&self, index: usize) -> Option<&[f64]> {
        self.samples.chunks_exact(self.ir_len).nth(index)
    }

    /// Iterate over the IRs in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, f64> {
        self.samples.chunks_exact(self.ir_len)
    }

    /// Peak level of each IR in dB.
    pub fn peaks_db(&self) -> Vec<f64> {
        self.iter().map(peak_db).collect()
    }
}

/// The outcome of an extraction: the bank plus anything worth reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The calibrated responses.
    pub bank: CalibratedIrBank,
    /// Recoverable problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// True when nothing had to be recovered from.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Turns a recording of the impulse train into a [`CalibratedIrBank`].
#[derive(Debug, Clone)]
pub struct ResponseExtractor {
    config: CaptureConfig,
    profile: AmplitudeProfile,
}

impl ResponseExtractor {
    /// Create an extractor, validating the config first.
    pub fn new(config: &CaptureConfig) -> Result<Self> {
        config.validate()?;
        let profile = AmplitudeProfile::from_config(config)?;
        Ok(Self {
            config: config.clone(),
            profile,
        })
    }

    /// The config this extractor was built from.
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Excitation gains divided out of each response.
    pub fn profile(&self) -> &AmplitudeProfile {
        &self.profile
    }

    /// Extract responses from an integer PCM recording.
    pub fn extract(&self, recording: &PcmBuffer) -> Result<Extraction> {
        self.extract_normalized(&recording.to_normalized(), recording.sample_rate)
    }

    /// Extract responses from a recording already scaled to `[-1, 1]`.
    pub fn extract_normalized(&self, samples: &[f64], sample_rate: u32) -> Result<Extraction> {
        if sample_rate != self.config.sample_rate {
            return Err(AnalysisError::SampleRateMismatch {
                expected: self.config.sample_rate,
                actual: sample_rate,
            });
        }

        let interval = self.config.interval_samples();
        let padding = 2 * interval;
        if samples.len() < padding {
            return Err(AnalysisError::RecordingTooShort {
                required: padding,
                actual: samples.len(),
            });
        }

        let payload = &samples[interval..samples.len() - interval];
        let expected = self.config.expected_payload();
        let mut diagnostics = Vec::new();

        if payload.len() != expected {
            if self.config.length_policy == LengthPolicy::Strict {
                return Err(AnalysisError::LengthMismatch {
                    expected,
                    actual: payload.len(),
                });
            }
            let diagnostic = Diagnostic::LengthMismatch {
                expected,
                actual: payload.len(),
            };
            tracing::warn!("{diagnostic}");
            diagnostics.push(diagnostic);
        }

        let ir_len = self.config.ir_len;
        let usable = &payload[..payload.len().min(expected)];
        let matrix = IrMatrix::gather(usable, interval, ir_len)
            .filter(|m| m.num_rows() > 0)
            .ok_or(AnalysisError::NoCompleteImpulses {
                ir_len,
                actual: payload.len(),
            })?;
        let rows = matrix.num_rows();
        if rows < self.profile.len() {
            tracing::debug!(
                kept = rows,
                dropped = self.profile.len() - rows,
                "dropping incomplete impulses"
            );
        }

        let calibrated = matrix.rescale(self.profile.gains()).ok_or(
            AnalysisError::ProfileMismatch {
                rows,
                gains: self.profile.len(),
            },
        )?;

        tracing::debug!(
            irs = rows,
            ir_len,
            "extracted calibrated IR bank"
        );

        Ok(Extraction {
            bank: CalibratedIrBank {
                samples: calibrated.into_flat(),
                ir_len,
                sample_rate,
            },
            diagnostics,
        })
    }
}
