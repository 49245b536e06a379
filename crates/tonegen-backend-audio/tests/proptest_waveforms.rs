//! Property-based tests for waveform generation, mixing and quantization.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tonegen-backend-audio --test proptest_waveforms
//! ```

use proptest::prelude::*;

use tonegen_backend_audio::mixer::{mix_all, transpose_samples};
use tonegen_backend_audio::synthesis::{
    fluctuating_sine_wave, num_samples, sine_wave, triangle_wave,
};
use tonegen_backend_audio::wav::{quantize_sample, samples_to_pcm, WavFormat};

fn sample_rate() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![1000u32, 8000, 11025, 22050, 44100, 48000])
}

fn bounded_samples(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-2.0f64..2.0, 0..max_len)
}

// ============================================================================
// Sample counts
// ============================================================================

proptest! {
    /// The last sample time lies before the duration and one more would reach it.
    #[test]
    fn sample_times_stay_before_duration(
        duration in 0.0001f64..5.0,
        sr in sample_rate(),
    ) {
        let n = num_samples(duration, sr);
        let rate = f64::from(sr);
        prop_assert!(n >= 1);
        prop_assert!(((n - 1) as f64) / rate < duration);
        prop_assert!(duration <= (n as f64) / rate);
    }

    /// Every generator returns num_samples(duration, sample_rate) samples.
    #[test]
    fn generators_cover_duration(
        duration in 0.0001f64..0.2,
        sr in sample_rate(),
        frequency in 1.0f64..2000.0,
    ) {
        let expected = num_samples(duration, sr);
        prop_assert_eq!(sine_wave(frequency, 0.5, duration, sr).len(), expected);
        prop_assert_eq!(triangle_wave(frequency, 0.5, duration, sr).len(), expected);
        prop_assert_eq!(
            fluctuating_sine_wave(frequency, frequency * 1.5, 3.0, 0.5, duration, sr).len(),
            expected
        );
    }
}

// ============================================================================
// Amplitude bounds
// ============================================================================

proptest! {
    /// Sine samples never exceed the amplitude.
    #[test]
    fn sine_within_amplitude(
        frequency in 1.0f64..5000.0,
        amplitude in 0.0f64..1.0,
        sr in sample_rate(),
    ) {
        for s in sine_wave(frequency, amplitude, 0.02, sr) {
            prop_assert!(s.abs() <= amplitude + 1e-12);
        }
    }

    /// Triangle samples never exceed the amplitude.
    #[test]
    fn triangle_within_amplitude(
        frequency in 1.0f64..5000.0,
        amplitude in 0.0f64..1.0,
        sr in sample_rate(),
    ) {
        for s in triangle_wave(frequency, amplitude, 0.02, sr) {
            prop_assert!(s.abs() <= amplitude * (1.0 + 1e-9) + 1e-12, "sample {} > {}", s, amplitude);
        }
    }

    /// Fluctuating sine samples never exceed the amplitude.
    #[test]
    fn fluctuating_sine_within_amplitude(
        start in 1.0f64..2000.0,
        end in 1.0f64..2000.0,
        pulse in 0.1f64..50.0,
        amplitude in 0.0f64..1.0,
    ) {
        for s in fluctuating_sine_wave(start, end, pulse, amplitude, 0.02, 8000) {
            prop_assert!(s.abs() <= amplitude + 1e-12);
        }
    }
}

// ============================================================================
// Mixing
// ============================================================================

proptest! {
    /// The mix is as long as the longer input and stays in [-1, 1].
    #[test]
    fn mix_length_and_bounds(a in bounded_samples(64), b in bounded_samples(64)) {
        let mixed = transpose_samples(&a, &b);
        prop_assert_eq!(mixed.len(), a.len().max(b.len()));
        prop_assert!(mixed.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    /// Mixing is symmetric in its two inputs.
    #[test]
    fn mix_is_symmetric(a in bounded_samples(32), b in bounded_samples(32)) {
        prop_assert_eq!(transpose_samples(&a, &b), transpose_samples(&b, &a));
    }

    /// Folding many inputs yields the longest length.
    #[test]
    fn mix_all_length(inputs in prop::collection::vec(bounded_samples(16), 1..6)) {
        let longest = inputs.iter().map(Vec::len).max().unwrap_or(0);
        let mixed = mix_all(inputs.iter().map(Vec::as_slice));
        prop_assert_eq!(mixed.len(), longest);
        prop_assert!(mixed.iter().all(|s| (-1.0..=1.0).contains(s)));
    }
}

// ============================================================================
// Quantization
// ============================================================================

proptest! {
    /// Quantized values stay within the signed range of the sample width.
    #[test]
    fn quantize_in_range(sample in -10.0f64..10.0, bytes in 1u32..=2) {
        let format = WavFormat::mono(44100, bytes).unwrap();
        let q = quantize_sample(sample, &format);
        prop_assert!(q >= format.min_sample() && q <= format.max_sample());
    }

    /// Quantization never decreases as the input grows.
    #[test]
    fn quantize_is_monotonic(a in -1.0f64..1.0, b in -1.0f64..1.0) {
        let format = WavFormat::mono(44100, 2).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quantize_sample(lo, &format) <= quantize_sample(hi, &format));
    }

    /// PCM output is exactly bytes_per_sample bytes per input sample.
    #[test]
    fn pcm_length(samples in bounded_samples(128), bytes in 1u32..=2) {
        let format = WavFormat::mono(44100, bytes).unwrap();
        prop_assert_eq!(samples_to_pcm(&samples, &format).len(), samples.len() * bytes as usize);
    }
}
