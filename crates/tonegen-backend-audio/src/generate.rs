//! Main entry point for rendering a render spec.
//!
//! Each layer is synthesized for its own duration, the layers are folded
//! together with clipping, and the mix is encoded as mono PCM.

use tonegen_spec::{validate_spec, ErrorCode, Layer, RenderSpec, ValidationError};
use tracing::debug;

use crate::error::{AudioError, AudioResult};
use crate::mixer::mix_all;
use crate::synthesis::{
    num_samples, FluctuatingSineSynth, SineSynth, Synthesizer, TriangleSynth,
};
use crate::wav::{WavFormat, WavHeader, WavResult, HEADER_LEN};

/// Result of rendering a spec.
#[derive(Debug)]
pub struct GenerateResult {
    /// WAV file data.
    pub wav: WavResult,
    /// Number of layers mixed.
    pub num_layers: usize,
}

/// Renders a spec to WAV bytes.
///
/// The spec is validated first; the first validation error is converted
/// into the matching [`AudioError`]. Warnings do not stop rendering. The
/// header is sized before any layer is synthesized, so output too large for
/// a WAV file fails without allocating sample buffers.
pub fn generate(spec: &RenderSpec) -> AudioResult<GenerateResult> {
    let validation = validate_spec(spec);
    if let Some(error) = validation.errors.first() {
        return Err(validation_to_audio_error(spec, error));
    }

    let format = WavFormat::mono(spec.sample_rate, u32::from(spec.bytes_per_sample))?;
    WavHeader::new(format, planned_data_length(spec))?;

    let rendered: Vec<Vec<f64>> = spec
        .layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let samples = render_layer(layer, spec.duration_seconds, spec.sample_rate);
            debug!(
                index,
                kind = layer.kind(),
                num_samples = samples.len(),
                "rendered layer"
            );
            samples
        })
        .collect();

    let mixed = mix_all(rendered.iter().map(Vec::as_slice));
    let wav = WavResult::from_mono(&mixed, spec.sample_rate, u32::from(spec.bytes_per_sample))?;

    Ok(GenerateResult {
        wav,
        num_layers: spec.layers.len(),
    })
}

/// Synthesizes one layer without clipping.
///
/// The layer's own duration is used when present, otherwise
/// `default_duration`.
pub fn render_layer(layer: &Layer, default_duration: f64, sample_rate: u32) -> Vec<f64> {
    let duration = layer.duration_or(default_duration);
    match *layer {
        Layer::Sine {
            frequency,
            amplitude,
            ..
        } => SineSynth::new(frequency, amplitude).synthesize_for(duration, sample_rate),
        Layer::Triangle {
            frequency,
            amplitude,
            ..
        } => TriangleSynth::new(frequency, amplitude).synthesize_for(duration, sample_rate),
        Layer::FluctuatingSine {
            starting_freq,
            ending_freq,
            pulse_freq,
            amplitude,
            ..
        } => FluctuatingSineSynth::new(starting_freq, ending_freq, pulse_freq, amplitude)
            .synthesize_for(duration, sample_rate),
    }
}

/// Length in bytes of the data chunk the mix will occupy, padding included.
fn planned_data_length(spec: &RenderSpec) -> u64 {
    let longest = spec
        .layers
        .iter()
        .map(|layer| num_samples(layer.duration_or(spec.duration_seconds), spec.sample_rate))
        .max()
        .unwrap_or(0) as u64;
    let padded = longest.saturating_add(longest % 2);
    padded.saturating_mul(u64::from(spec.bytes_per_sample))
}

fn validation_to_audio_error(spec: &RenderSpec, error: &ValidationError) -> AudioError {
    match error.code {
        ErrorCode::DataTooLarge => AudioError::HeaderFieldOutOfRange {
            field: "ChunkSize",
            value: planned_data_length(spec).saturating_add(HEADER_LEN as u64 - 8),
        },
        ErrorCode::UnsupportedChannelCount if spec.channels > 1 => {
            AudioError::UnsupportedChannelCount {
                channels: u32::from(spec.channels),
            }
        }
        ErrorCode::UnsupportedBytesPerSample => AudioError::InvalidBytesPerSample {
            bytes: u32::from(spec.bytes_per_sample),
        },
        _ => {
            let name = error.path.clone().unwrap_or_else(|| error.code.to_string());
            AudioError::invalid_param(name, error.message.clone())
        }
    }
}
