//! Render spec validation logic.

pub mod common;


use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::layer::Layer;
use crate::spec::RenderSpec;

use common::{validate_finite, validate_positive, validate_range};

/// Header bytes counted by the RIFF `ChunkSize` ahead of the sample data.
const RIFF_OVERHEAD: u64 = 36;

/// Largest data chunk whose `ChunkSize` still fits in 32 bits.
const MAX_DATA_LENGTH: f64 = (u32::MAX as u64 - RIFF_OVERHEAD) as f64;

/// Validates a render spec and returns a validation result.
///
/// Every problem is collected; validation does not stop at the first error.
///
/// # Example
/// ```
/// use tonegen_spec::{Layer, RenderSpec};
/// use tonegen_spec::validation::validate_spec;
///
/// let spec = RenderSpec::builder()
///     .layer(Layer::sine(440.0, 0.5))
///     .output("tone.wav")
///     .build();
///
/// let result = validate_spec(&spec);
/// assert!(result.is_ok());
/// assert!(result.warnings.is_empty());
/// ```
pub fn validate_spec(spec: &RenderSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_format(spec, &mut result);
    validate_output(spec, &mut result);

    if let Err(e) = validate_positive("duration_seconds", spec.duration_seconds) {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveParameter,
            e.message,
            "duration_seconds",
        ));
    }

    if spec.layers.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoLayers,
            "spec must declare at least one layer",
            "layers",
        ));
    }

    for (i, layer) in spec.layers.iter().enumerate() {
        validate_layer(layer, i, &mut result);
        validate_data_length(spec, layer, i, &mut result);
    }

    result
}

fn validate_format(spec: &RenderSpec, result: &mut ValidationResult) {
    if spec.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample_rate must be positive, got 0",
            "sample_rate",
        ));
    }

    if let Err(e) = validate_range("bytes_per_sample", f64::from(spec.bytes_per_sample), 1.0, 2.0)
    {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedBytesPerSample,
            e.message,
            "bytes_per_sample",
        ));
    }

    if spec.channels != 1 {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedChannelCount,
            format!("only mono output is supported, got {} channels", spec.channels),
            "channels",
        ));
    }
}

fn validate_output(spec: &RenderSpec, result: &mut ValidationResult) {
    match spec.output.as_deref() {
        None => result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingOutput,
            "no output path declared; one must be given on the command line",
            "output",
        )),
        Some(path) if !path.to_ascii_lowercase().ends_with(".wav") => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidOutputPath,
                format!("output path must end in .wav, got '{}'", path),
                "output",
            ))
        }
        Some(_) => {}
    }
}

/// Rejects layers whose rendered PCM data cannot be described by the header.
///
/// Skipped when the format or duration is already invalid.
fn validate_data_length(
    spec: &RenderSpec,
    layer: &Layer,
    index: usize,
    result: &mut ValidationResult,
) {
    if spec.sample_rate == 0 || !(1..=2).contains(&spec.bytes_per_sample) {
        return;
    }
    let duration = layer.duration_or(spec.duration_seconds);
    if !duration.is_finite() || duration <= 0.0 {
        return;
    }

    let samples = (duration * f64::from(spec.sample_rate)).ceil();
    let bytes = samples * f64::from(spec.bytes_per_sample);
    let data_length = bytes + bytes % 2.0;
    if data_length > MAX_DATA_LENGTH {
        result.add_error(ValidationError::with_path(
            ErrorCode::DataTooLarge,
            format!(
                "{} s at {} Hz needs {} data bytes, more than a WAV file can hold ({})",
                duration, spec.sample_rate, data_length, MAX_DATA_LENGTH
            ),
            format!("layers[{}].duration_seconds", index),
        ));
    }
}

fn validate_layer(layer: &Layer, index: usize, result: &mut ValidationResult) {
    let path = |field: &str| format!("layers[{}].{}", index, field);

    let positive = |name: &str, value: f64, result: &mut ValidationResult| {
        if let Err(e) = validate_positive(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonPositiveParameter,
                e.message,
                path(name),
            ));
        }
    };

    match layer {
        Layer::Sine { frequency, .. } | Layer::Triangle { frequency, .. } => {
            positive("frequency", *frequency, result);
        }
        Layer::FluctuatingSine {
            starting_freq,
            ending_freq,
            pulse_freq,
            ..
        } => {
            positive("starting_freq", *starting_freq, result);
            positive("ending_freq", *ending_freq, result);
            positive("pulse_freq", *pulse_freq, result);
            if starting_freq == ending_freq {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::SilentFluctuation,
                    "starting_freq equals ending_freq; the layer renders silence",
                    path("ending_freq"),
                ));
            }
        }
    }

    if let Some(seconds) = layer.duration_override() {
        positive("duration_seconds", seconds, result);
    }

    let amplitude = layer.amplitude();
    if let Err(e) = validate_finite("amplitude", amplitude) {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteAmplitude,
            e.message,
            path("amplitude"),
        ));
    } else if amplitude.abs() > 1.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::AmplitudeWillClip,
            format!("amplitude {} exceeds 1.0 and will clip", amplitude),
            path("amplitude"),
        ));
    }
}
