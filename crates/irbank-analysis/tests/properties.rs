//! Property-based tests for the amplitude profile and impulse placement.

use irbank_analysis::{AmplitudeProfile, CaptureConfig, ImpulseSynthesizer};
use irbank_core::BitDepth;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Each half has one polarity and strictly increasing magnitude, and
    /// impulse `i` is the negation of impulse `i + N/2`.
    #[test]
    fn profile_shape(half in 1usize..64, min_db in -120.0f64..-0.5) {
        let n = half * 2;
        let profile = AmplitudeProfile::new(min_db, n).unwrap();
        prop_assert_eq!(profile.len(), n);

        let (neg, pos) = profile.gains().split_at(half);
        prop_assert!(neg.iter().all(|&g| g < 0.0));
        prop_assert!(pos.iter().all(|&g| g > 0.0));
        for w in neg.windows(2) {
            prop_assert!(w[1].abs() > w[0].abs());
        }
        for w in pos.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
        for i in 0..half {
            prop_assert_eq!(neg[i], -pos[i]);
        }
        prop_assert!(profile.iter().all(|g| g.abs() < 1.0 && g != 0.0));
    }

    /// Odd counts are always rejected.
    #[test]
    fn odd_counts_rejected(half in 0usize..64, min_db in -120.0f64..-0.5) {
        prop_assert!(AmplitudeProfile::new(min_db, half * 2 + 1).is_err());
    }

    /// A config that validates yields exactly one nonzero sample per gain, on
    /// the grid; one that does not has a quietest gain that rounds to zero.
    #[test]
    fn impulse_placement(
        half in 1usize..8,
        sample_rate in 4u32..200,
        depth_idx in 0usize..4,
        min_db in -120.0f64..-0.5,
    ) {
        let depth = BitDepth::ALL[depth_idx];
        let config = CaptureConfig {
            num_impulses: half * 2,
            sample_rate,
            min_db,
            ir_len: 1,
            bit_depth: depth,
            ..CaptureConfig::default()
        };
        let Ok(synth) = ImpulseSynthesizer::new(&config) else {
            let profile = AmplitudeProfile::from_config(&config).unwrap();
            prop_assert_eq!(depth.quantize(profile.gains()[half]), 0);
            return Ok(());
        };
        let buffer = synth.synthesize().unwrap();
        let interval = sample_rate as usize;

        prop_assert_eq!(buffer.len(), (half * 2 + 2) * interval);
        let expected: Vec<usize> = (0..half * 2).map(|i| (i + 1) * interval).collect();
        prop_assert_eq!(buffer.nonzero_positions(), expected.clone());
        for (pos, gain) in expected.iter().zip(synth.profile().iter()) {
            prop_assert_eq!(buffer.samples[*pos], depth.quantize(gain));
        }
    }
}
