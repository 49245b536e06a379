//! Tone command implementation
//!
//! Renders a single waveform from command-line parameters, without a spec
//! file.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tonegen_spec::{Layer, RenderSpec};

use super::generate::render_spec;
use super::json_output::{error_codes, print_json, GenerateOutput, JsonError};
use super::reporting::print_failure;
use super::EXIT_INVALID;

/// Waveform selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    FluctuatingSine,
}

impl Waveform {
    /// Name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::FluctuatingSine => "fluctuating-sine",
        }
    }
}

/// Parameters of the `tone` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneArgs {
    pub waveform: Waveform,
    pub output: String,
    pub frequency: f64,
    pub amplitude: f64,
    pub duration: f64,
    pub sample_rate: u32,
    pub bytes_per_sample: u16,
    pub starting_freq: Option<f64>,
    pub ending_freq: Option<f64>,
    pub pulse_freq: Option<f64>,
}

/// Builds the one-layer spec described by `args`.
///
/// The fluctuating sine needs all three of `--starting-freq`,
/// `--ending-freq` and `--pulse-freq`; a missing one is reported by name.
pub fn build_spec(args: &ToneArgs) -> std::result::Result<RenderSpec, String> {
    let layer = match args.waveform {
        Waveform::Sine => Layer::sine(args.frequency, args.amplitude),
        Waveform::Triangle => Layer::triangle(args.frequency, args.amplitude),
        Waveform::FluctuatingSine => {
            let starting = args
                .starting_freq
                .ok_or("--starting-freq is required for fluctuating-sine")?;
            let ending = args
                .ending_freq
                .ok_or("--ending-freq is required for fluctuating-sine")?;
            let pulse = args
                .pulse_freq
                .ok_or("--pulse-freq is required for fluctuating-sine")?;
            Layer::fluctuating_sine(starting, ending, pulse, args.amplitude)
        }
    };

    Ok(RenderSpec::builder()
        .sample_rate(args.sample_rate)
        .bytes_per_sample(args.bytes_per_sample)
        .duration_seconds(args.duration)
        .layer(layer)
        .output(args.output.clone())
        .build())
}

/// Run the tone command
///
/// # Returns
/// Exit code: 0 success, 1 invalid arguments, 2 generation error
pub fn run(args: &ToneArgs, json_output: bool) -> Result<ExitCode> {
    let spec = match build_spec(args) {
        Ok(spec) => spec,
        Err(message) => {
            if json_output {
                let error = JsonError::new(error_codes::INVALID_ARGS, message);
                print_json(&GenerateOutput::failure(vec![error], Vec::new(), None));
            } else {
                print_failure(error_codes::INVALID_ARGS, &message);
            }
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    if !json_output {
        println!(
            "{} {} tone -> {}",
            "Generating:".cyan().bold(),
            args.waveform.as_str(),
            args.output
        );
    }
    render_spec(spec, None, json_output)
}
