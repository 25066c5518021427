//! irbank Core - shared value types for impulse-response calibration
//!
//! This crate holds the pieces every other irbank crate agrees on:
//!
//! - [`BitDepth`] - Integer PCM sample formats and their full-scale range
//! - [`PcmBuffer`] - A mono, sample-rate-tagged integer PCM buffer
//! - [`math`] - Decibel conversions and level measurements
//!
//! ## Example
//!
//! ```rust
//! use irbank_core::{BitDepth, PcmBuffer, db_to_linear};
//!
//! let mut samples = vec![0; 48];
//! samples[8] = (db_to_linear(-6.0) * BitDepth::Int16.max() as f64).round() as i32;
//!
//! let buffer = PcmBuffer::new(8, BitDepth::Int16, samples);
//! assert_eq!(buffer.nonzero_positions(), vec![8]);
//! assert_eq!(buffer.duration_secs(), 6.0);
//! ```

pub mod math;
mod pcm;

pub use math::{db_to_linear, linear_to_db, peak, peak_db, rms, rms_db, SILENCE_DB};
pub use pcm::{BitDepth, PcmBuffer};
