//! Main render spec type.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::layer::Layer;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default bytes per sample (16-bit PCM).
pub const DEFAULT_BYTES_PER_SAMPLE: u16 = 2;

/// Default channel count. Only mono is supported.
pub const DEFAULT_CHANNELS: u16 = 1;

/// Default duration in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 1.0;

/// A render spec describing one WAV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSpec {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Bytes per encoded sample (1 or 2).
    #[serde(default = "default_bytes_per_sample")]
    pub bytes_per_sample: u16,
    /// Channel count.
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Default duration for every layer, in seconds.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: f64,
    /// Waveform layers to mix.
    pub layers: Vec<Layer>,
    /// Output WAV path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_bytes_per_sample() -> u16 {
    DEFAULT_BYTES_PER_SAMPLE
}

fn default_channels() -> u16 {
    DEFAULT_CHANNELS
}

fn default_duration_seconds() -> f64 {
    DEFAULT_DURATION_SECONDS
}

impl RenderSpec {
    /// Creates a new render spec builder.
    pub fn builder() -> RenderSpecBuilder {
        RenderSpecBuilder::new()
    }

    /// Parses a spec from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a spec from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Serializes the spec to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns the longest effective layer duration in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.layers
            .iter()
            .map(|layer| layer.duration_or(self.duration_seconds))
            .fold(0.0, f64::max)
    }
}

/// Builder for render specs.
#[derive(Debug, Clone)]
pub struct RenderSpecBuilder {
    sample_rate: u32,
    bytes_per_sample: u16,
    channels: u16,
    duration_seconds: f64,
    layers: Vec<Layer>,
    output: Option<String>,
}

impl RenderSpecBuilder {
    /// Creates a new builder with default format parameters.
    pub fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bytes_per_sample: DEFAULT_BYTES_PER_SAMPLE,
            channels: DEFAULT_CHANNELS,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            layers: Vec::new(),
            output: None,
        }
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the bytes per sample.
    pub fn bytes_per_sample(mut self, bytes_per_sample: u16) -> Self {
        self.bytes_per_sample = bytes_per_sample;
        self
    }

    /// Sets the channel count.
    pub fn channels(mut self, channels: u16) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the default layer duration.
    pub fn duration_seconds(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Adds a layer.
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Sets the output path.
    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Builds the spec.
    pub fn build(self) -> RenderSpec {
        RenderSpec {
            sample_rate: self.sample_rate,
            bytes_per_sample: self.bytes_per_sample,
            channels: self.channels,
            duration_seconds: self.duration_seconds,
            layers: self.layers,
            output: self.output,
        }
    }
}

impl Default for RenderSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
