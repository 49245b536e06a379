//! Waveform layer types for render specs.

use serde::{Deserialize, Serialize};

/// A single waveform layer in a render spec.
///
/// Layers are rendered independently and then mixed additively with hard
/// clipping. Each layer may override the spec-wide duration, which is how
/// sequences of unequal length end up in the mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Layer {
    /// Pure sine wave.
    Sine {
        /// Frequency in Hz.
        frequency: f64,
        /// Peak amplitude (typically <= 1.0).
        amplitude: f64,
        /// Layer duration in seconds (default: the spec duration).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_seconds: Option<f64>,
    },
    /// Piecewise-linear triangle wave.
    Triangle {
        /// Frequency in Hz.
        frequency: f64,
        /// Peak amplitude (typically <= 1.0).
        amplitude: f64,
        /// Layer duration in seconds (default: the spec duration).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_seconds: Option<f64>,
    },
    /// Frequency-modulated sine that warbles at `pulse_freq`.
    ///
    /// The carrier runs at `|starting_freq - ending_freq| / 2`, which is also
    /// the modulation depth. It does not sweep from start to end.
    FluctuatingSine {
        /// Starting frequency in Hz.
        starting_freq: f64,
        /// Ending frequency in Hz.
        ending_freq: f64,
        /// Modulation rate in Hz.
        pulse_freq: f64,
        /// Peak amplitude (typically <= 1.0).
        amplitude: f64,
        /// Layer duration in seconds (default: the spec duration).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_seconds: Option<f64>,
    },
}

impl Layer {
    /// Creates a sine layer.
    pub fn sine(frequency: f64, amplitude: f64) -> Self {
        Layer::Sine {
            frequency,
            amplitude,
            duration_seconds: None,
        }
    }

    /// Creates a triangle layer.
    pub fn triangle(frequency: f64, amplitude: f64) -> Self {
        Layer::Triangle {
            frequency,
            amplitude,
            duration_seconds: None,
        }
    }

    /// Creates a fluctuating sine layer.
    pub fn fluctuating_sine(
        starting_freq: f64,
        ending_freq: f64,
        pulse_freq: f64,
        amplitude: f64,
    ) -> Self {
        Layer::FluctuatingSine {
            starting_freq,
            ending_freq,
            pulse_freq,
            amplitude,
            duration_seconds: None,
        }
    }

    /// Returns a copy of this layer with its own duration.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        match &mut self {
            Layer::Sine {
                duration_seconds, ..
            }
            | Layer::Triangle {
                duration_seconds, ..
            }
            | Layer::FluctuatingSine {
                duration_seconds, ..
            } => *duration_seconds = Some(seconds),
        }
        self
    }

    /// Returns the layer type as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            Layer::Sine { .. } => "sine",
            Layer::Triangle { .. } => "triangle",
            Layer::FluctuatingSine { .. } => "fluctuating_sine",
        }
    }

    /// Returns the peak amplitude of this layer.
    pub fn amplitude(&self) -> f64 {
        match self {
            Layer::Sine { amplitude, .. }
            | Layer::Triangle { amplitude, .. }
            | Layer::FluctuatingSine { amplitude, .. } => *amplitude,
        }
    }

    /// Returns the duration override, if any.
    pub fn duration_override(&self) -> Option<f64> {
        match self {
            Layer::Sine {
                duration_seconds, ..
            }
            | Layer::Triangle {
                duration_seconds, ..
            }
            | Layer::FluctuatingSine {
                duration_seconds, ..
            } => *duration_seconds,
        }
    }

    /// Returns the effective duration given the spec-wide default.
    pub fn duration_or(&self, default_seconds: f64) -> f64 {
        self.duration_override().unwrap_or(default_seconds)
    }
}
