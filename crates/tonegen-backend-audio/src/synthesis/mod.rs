//! Waveform synthesis.
//!
//! Every generator is a pure function of time. Sample `i` is evaluated at
//! `t = i / sample_rate`, and a sequence of `duration` seconds holds
//! `ceil(duration * sample_rate)` samples, counted so that every sample time
//! is strictly below `duration`.
//!
//! - `oscillators` - sine, triangle and fluctuating sine generators

pub mod oscillators;

pub use oscillators::{
    fluctuating_sine_wave, sine_wave, triangle_wave, FluctuatingSineSynth, SineSynth,
    TriangleSynth,
};

/// Common trait for all waveform generators.
pub trait Synthesizer {
    /// Evaluates the waveform at time `t` seconds.
    fn value_at(&self, t: f64) -> f64;

    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    ///
    /// # Returns
    /// Vector of samples, nominally within `[-amplitude, amplitude]`
    fn synthesize(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        (0..num_samples)
            .map(|i| self.value_at(i as f64 / sample_rate))
            .collect()
    }

    /// Generates `duration` seconds of audio at `sample_rate`.
    fn synthesize_for(&self, duration: f64, sample_rate: u32) -> Vec<f64> {
        self.synthesize(
            num_samples(duration, sample_rate),
            f64::from(sample_rate),
        )
    }
}

/// Number of samples covering `duration` seconds at `sample_rate`.
///
/// The result `n` satisfies `(n - 1) / sample_rate < duration <= n /
/// sample_rate`, so no sample time reaches the duration. Non-positive or
/// non-finite durations and a zero sample rate yield zero.
pub fn num_samples(duration: f64, sample_rate: u32) -> usize {
    if sample_rate == 0 || !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    let sr = f64::from(sample_rate);
    let product = duration * sr;
    if product >= usize::MAX as f64 {
        return usize::MAX;
    }

    // The rounded product can land one sample off either side of the boundary.
    let mut n = product.ceil() as usize;
    if n > 0 && (n - 1) as f64 / sr >= duration {
        n -= 1;
    }
    if (n as f64) / sr < duration {
        n += 1;
    }
    n
}
