//! Integer PCM buffers.

use serde::{Deserialize, Serialize};

/// Integer PCM sample format.
///
/// The full-scale value returned by [`BitDepth::max`] is the divisor used to
/// normalize recordings and the multiplier used to quantize impulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitDepth {
    /// 8-bit signed samples.
    Int8,
    /// 16-bit signed samples.
    #[default]
    Int16,
    /// 24-bit signed samples.
    Int24,
    /// 32-bit signed samples.
    Int32,
}

impl BitDepth {
    /// All supported depths, narrowest first.
    pub const ALL: [BitDepth; 4] = [
        BitDepth::Int8,
        BitDepth::Int16,
        BitDepth::Int24,
        BitDepth::Int32,
    ];

    /// Bits per sample.
    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::Int8 => 8,
            BitDepth::Int16 => 16,
            BitDepth::Int24 => 24,
            BitDepth::Int32 => 32,
        }
    }

    /// Look up a depth by its bit count.
    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.bits() == bits)
    }

    /// Largest positive sample value.
    pub const fn max(self) -> i32 {
        match self {
            BitDepth::Int32 => i32::MAX,
            _ => (1i32 << (self.bits() - 1)) - 1,
        }
    }

    /// Most negative sample value.
    pub const fn min(self) -> i32 {
        match self {
            BitDepth::Int32 => i32::MIN,
            _ => -(1i32 << (self.bits() - 1)),
        }
    }

    /// Quantize a normalized value to this depth, rounding to nearest and
    /// saturating at the format's range.
    pub fn quantize(self, value: f64) -> i32 {
        let scaled = (value * self.max() as f64).round();
        scaled.clamp(self.min() as f64, self.max() as f64) as i32
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "int{}", self.bits())
    }
}

/// Mono integer PCM audio tagged with its sample rate and depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample format.
    pub depth: BitDepth,
    /// Raw sample values, each within `depth.min()..=depth.max()`.
    pub samples: Vec<i32>,
}

impl PcmBuffer {
    /// Wrap raw samples.
    pub fn new(sample_rate: u32, depth: BitDepth, samples: Vec<i32>) -> Self {
        Self {
            sample_rate,
            depth,
            samples,
        }
    }

    /// Create a buffer of `len` zero samples.
    pub fn silence(sample_rate: u32, depth: BitDepth, len: usize) -> Self {
        Self::new(sample_rate, depth, vec![0; len])
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Samples divided by the depth's full-scale value.
    pub fn to_normalized(&self) -> Vec<f64> {
        let max = self.depth.max() as f64;
        self.samples.iter().map(|&s| s as f64 / max).collect()
    }

    /// Indices of every non-zero sample, ascending.
    pub fn nonzero_positions(&self) -> Vec<usize> {
        self.samples
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != 0)
            .map(|(i, _)| i)
            .collect()
    }
}
