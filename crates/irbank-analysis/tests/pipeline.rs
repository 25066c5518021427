//! End-to-end tests: synthesize an impulse train, "record" it through a
//! simulated system, and extract the calibrated bank.

use irbank_analysis::{
    AmplitudeProfile, AnalysisError, CaptureConfig, Diagnostic, ImpulseSynthesizer, LengthPolicy,
    ResponseExtractor,
};
use irbank_core::{BitDepth, PcmBuffer};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config(num_impulses: usize, sample_rate: u32, ir_len: usize) -> CaptureConfig {
    CaptureConfig {
        num_impulses,
        spacing_secs: 1.0,
        sample_rate,
        min_db: -60.0,
        ir_len,
        ..CaptureConfig::default()
    }
}

/// Convolve an impulse train with a short kernel, as a linear system would.
fn convolve(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; signal.len()];
    for (n, &x) in signal.iter().enumerate() {
        if x == 0.0 {
            continue;
        }
        for (k, &h) in kernel.iter().enumerate() {
            if let Some(y) = out.get_mut(n + k) {
                *y += x * h;
            }
        }
    }
    out
}

/// Re-quantize a simulated capture to integer PCM.
fn capture(samples: &[f64], sample_rate: u32, depth: BitDepth) -> PcmBuffer {
    PcmBuffer::new(
        sample_rate,
        depth,
        samples.iter().map(|&s| depth.quantize(s)).collect(),
    )
}

// ===========================================================================
// Round trips
// ===========================================================================

#[test]
fn perfect_capture_recovers_unit_impulses() {
    let config = config(32, 1000, 64);
    let signal = ImpulseSynthesizer::new(&config).unwrap().synthesize().unwrap();
    let extractor = ResponseExtractor::new(&config).unwrap();
    let extraction = extractor.extract(&signal).unwrap();

    assert!(extraction.is_clean());
    assert_eq!(extraction.bank.len(), 32 * 64);

    for (ir, gain) in extraction.bank.iter().zip(extractor.profile().iter()) {
        // One quantization step of error at the impulse, scaled by the gain.
        let tolerance = 0.5 / (gain.abs() * BitDepth::Int16.max() as f64) + 1e-12;
        assert!(
            (ir[0] - 1.0).abs() <= tolerance,
            "gain {gain}: got {}",
            ir[0]
        );
        assert!(ir[1..].iter().all(|&s| s == 0.0));
    }
}

#[test]
fn linear_system_response_is_recovered_for_every_level() {
    let config = CaptureConfig {
        bit_depth: BitDepth::Int24,
        ..config(16, 2000, 8)
    };
    let kernel = [0.6, -0.3, 0.15, -0.05];

    let signal = ImpulseSynthesizer::new(&config).unwrap().synthesize().unwrap();
    let recorded = convolve(&signal.to_normalized(), &kernel);
    let recording = capture(&recorded, 2000, BitDepth::Int24);

    let bank = ResponseExtractor::new(&config)
        .unwrap()
        .extract(&recording)
        .unwrap()
        .bank;

    for ir in bank.iter() {
        for (k, &h) in kernel.iter().enumerate() {
            assert!((ir[k] - h).abs() < 0.01, "tap {k}: {} vs {h}", ir[k]);
        }
        assert!(ir[kernel.len()..].iter().all(|&s| s.abs() < 0.01));
    }
}

#[test]
fn polarity_is_undone() {
    let config = config(4, 100, 4);
    let signal = ImpulseSynthesizer::new(&config).unwrap().synthesize().unwrap();
    let bank = ResponseExtractor::new(&config)
        .unwrap()
        .extract(&signal)
        .unwrap()
        .bank;

    // Negative-polarity impulses come first in the signal, but every
    // calibrated response starts positive.
    assert!(signal.samples[100] < 0);
    assert!(bank.iter().all(|ir| ir[0] > 0.0));
}

// ===========================================================================
// Drift handling
// ===========================================================================

#[test]
fn capture_drift_keeps_bank_length() {
    let config = config(8, 100, 10);
    let signal = ImpulseSynthesizer::new(&config).unwrap().synthesize().unwrap();

    let mut long = signal.clone();
    long.samples.extend(std::iter::repeat_n(0, 37));

    let extraction = ResponseExtractor::new(&config).unwrap().extract(&long).unwrap();
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(extraction.bank.len(), config.bank_len());
}

#[test]
fn three_samples_short_drops_last_impulse() {
    let config = config(4, 8, 8);
    let mut recording = ImpulseSynthesizer::new(&config).unwrap().synthesize().unwrap();
    recording.samples.truncate(45);

    let extraction = ResponseExtractor::new(&config)
        .unwrap()
        .extract(&recording)
        .unwrap();
    assert_eq!(
        extraction.diagnostics,
        vec![Diagnostic::LengthMismatch {
            expected: 32,
            actual: 29
        }]
    );
    assert_eq!(extraction.bank.num_irs(), 3);
}

#[test]
fn short_recording_keeps_responses_that_fit() {
    // Responses shorter than the spacing survive a capture that loses the
    // tail of the last interval.
    let config = config(4, 8, 4);
    let mut recording = ImpulseSynthesizer::new(&config).unwrap().synthesize().unwrap();
    recording.samples.truncate(45);

    let extraction = ResponseExtractor::new(&config)
        .unwrap()
        .extract(&recording)
        .unwrap();
    assert!(!extraction.is_clean());
    assert_eq!(extraction.bank.num_irs(), 4);
    assert_eq!(extraction.bank.len(), config.bank_len());
    for ir in extraction.bank.iter() {
        assert!((ir[0] - 1.0).abs() < 1e-2, "got {ir:?}");
        assert!(ir[1..].iter().all(|&s| s == 0.0));
    }
}

#[test]
fn strict_policy_surfaces_drift_as_error() {
    let config = CaptureConfig {
        length_policy: LengthPolicy::Strict,
        ..config(4, 8, 8)
    };
    let mut recording = ImpulseSynthesizer::new(&config).unwrap().synthesize().unwrap();
    recording.samples.push(0);

    let err = ResponseExtractor::new(&config)
        .unwrap()
        .extract(&recording)
        .unwrap_err();
    assert_eq!(
        err,
        AnalysisError::LengthMismatch {
            expected: 32,
            actual: 33
        }
    );
}

#[test]
fn mismatched_capture_rate_is_rejected() {
    let generated = config(4, 8, 8);
    let signal = ImpulseSynthesizer::new(&generated).unwrap().synthesize().unwrap();

    let other = CaptureConfig {
        sample_rate: 16,
        ..generated
    };
    let err = ResponseExtractor::new(&other).unwrap().extract(&signal).unwrap_err();
    assert!(matches!(err, AnalysisError::SampleRateMismatch { .. }));
}

#[test]
fn profile_matches_between_pipelines() {
    let config = CaptureConfig::default();
    let synth = ImpulseSynthesizer::new(&config).unwrap();
    let extractor = ResponseExtractor::new(&config).unwrap();
    assert_eq!(synth.profile(), extractor.profile());
    assert_eq!(
        synth.profile(),
        &AmplitudeProfile::new(config.min_db, config.num_impulses).unwrap()
    );
}
