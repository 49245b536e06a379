//! Periodic waveform generators (sine, triangle, fluctuating sine).

use std::f64::consts::TAU;

use super::Synthesizer;

/// Sine wave synthesizer parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SineSynth {
    /// Creates a new sine synthesizer.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SineSynth {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (TAU * self.frequency * t).sin()
    }
}

/// Triangle wave synthesizer parameters.
///
/// One period is split into four equal regions: a rise from 0 to
/// `amplitude`, a fall through 0 to `-amplitude`, and a rise back to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl TriangleSynth {
    /// Creates a new triangle wave synthesizer.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    /// Length of one period in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }
}

impl Synthesizer for TriangleSynth {
    fn value_at(&self, t: f64) -> f64 {
        let period = self.period();
        let per_region = period / 4.0;
        let slope = self.amplitude / per_region;

        // `%` on f64 is the C fmod: for t >= 0 the result lies in [0, period).
        let x = t % period;

        // Region boundaries belong to the region that starts there.
        if x < per_region {
            slope * x
        } else if x < per_region * 3.0 {
            -slope * x + self.amplitude * 2.0
        } else {
            slope * x - self.amplitude * 4.0
        }
    }
}

/// Frequency-modulated sine that warbles at `pulse_freq`.
///
/// With `pulse_amplitude = |starting_freq - ending_freq| / 2` the output is
///
/// ```text
/// amplitude * sin(2π * pulse_amplitude * t + pulse_amplitude * sin(2π * pulse_freq * t))
/// ```
///
/// so the carrier runs at `pulse_amplitude` Hz and the same value sets the
/// modulation depth. The start and end frequencies only contribute their
/// difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluctuatingSineSynth {
    /// Starting frequency in Hz.
    pub starting_freq: f64,
    /// Ending frequency in Hz.
    pub ending_freq: f64,
    /// Modulation rate in Hz.
    pub pulse_freq: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl FluctuatingSineSynth {
    /// Creates a new fluctuating sine synthesizer.
    pub fn new(starting_freq: f64, ending_freq: f64, pulse_freq: f64, amplitude: f64) -> Self {
        Self {
            starting_freq,
            ending_freq,
            pulse_freq,
            amplitude,
        }
    }

    /// Carrier frequency and modulation depth.
    pub fn pulse_amplitude(&self) -> f64 {
        (self.starting_freq - self.ending_freq).abs() / 2.0
    }
}

impl Synthesizer for FluctuatingSineSynth {
    fn value_at(&self, t: f64) -> f64 {
        let pulse_amplitude = self.pulse_amplitude();
        let main_beat = TAU * pulse_amplitude * t;
        let modifier = pulse_amplitude * (TAU * t * self.pulse_freq).sin();
        self.amplitude * (main_beat + modifier).sin()
    }
}

/// Generates `duration` seconds of a sine wave.
pub fn sine_wave(frequency: f64, amplitude: f64, duration: f64, sample_rate: u32) -> Vec<f64> {
    SineSynth::new(frequency, amplitude).synthesize_for(duration, sample_rate)
}

/// Generates `duration` seconds of a triangle wave.
pub fn triangle_wave(frequency: f64, amplitude: f64, duration: f64, sample_rate: u32) -> Vec<f64> {
    TriangleSynth::new(frequency, amplitude).synthesize_for(duration, sample_rate)
}

/// Generates `duration` seconds of a fluctuating sine wave.
pub fn fluctuating_sine_wave(
    starting_freq: f64,
    ending_freq: f64,
    pulse_freq: f64,
    amplitude: f64,
    duration: f64,
    sample_rate: u32,
) -> Vec<f64> {
    FluctuatingSineSynth::new(starting_freq, ending_freq, pulse_freq, amplitude)
        .synthesize_for(duration, sample_rate)
}
