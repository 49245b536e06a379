//! Generate command implementation
//!
//! Renders a spec file to a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tonegen_backend_audio::generate;
use tonegen_backend_audio::wav::write_bytes_to_file;
use tonegen_spec::{canonical_spec_hash, validate_spec, BackendError, RenderSpec};
use tracing::debug;

use super::json_output::{
    error_codes, print_json, spec_error_to_json, validation_to_json, GenerateOutput,
    GenerateResult, JsonError,
};
use super::reporting::{print_failure, print_validation_messages};
use super::{EXIT_FAILED, EXIT_INVALID};

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the JSON render spec
/// * `output` - Output path overriding the spec's `output` field
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 spec error, 2 generation error
pub fn run(spec_path: &str, output: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let spec = match RenderSpec::from_file(spec_path) {
        Ok(spec) => spec,
        Err(e) if json_output => {
            let error = spec_error_to_json(&e, spec_path);
            print_json(&GenerateOutput::failure(vec![error], Vec::new(), None));
            return Ok(ExitCode::from(EXIT_INVALID));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load spec file: {}", spec_path));
        }
    };

    if !json_output {
        println!("{} {}", "Generating:".cyan().bold(), spec_path);
    }
    render_spec(spec, output, json_output)
}

/// Validates, renders and writes a spec that is already in memory.
///
/// `output` replaces the spec's own output path before validation, so the
/// `.wav` extension check applies to it.
pub fn render_spec(mut spec: RenderSpec, output: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let start = Instant::now();

    if let Some(path) = output {
        spec.output = Some(path.to_string());
    }
    let spec_hash = canonical_spec_hash(&spec).ok();

    let validation = validate_spec(&spec);
    let (errors, warnings) = validation_to_json(&validation);

    if !validation.is_ok() {
        if json_output {
            print_json(&GenerateOutput::failure(errors, warnings, spec_hash));
        } else {
            print_validation_messages(&validation);
            println!(
                "\n{} Spec has {} error(s)",
                "FAILED".red().bold(),
                validation.errors.len()
            );
        }
        return Ok(ExitCode::from(EXIT_INVALID));
    }

    let fail = |error: JsonError, code: u8| -> ExitCode {
        if json_output {
            print_json(&GenerateOutput::failure(
                vec![error],
                warnings.clone(),
                spec_hash.clone(),
            ));
        } else {
            print_validation_messages(&validation);
            print_failure(&error.code, &error.message);
        }
        ExitCode::from(code)
    };

    let Some(output_path) = spec.output.clone() else {
        let error = JsonError::new(
            error_codes::NO_OUTPUT,
            "no output path: pass --output or set \"output\" in the spec",
        );
        return Ok(fail(error, EXIT_INVALID));
    };

    let result = match generate(&spec) {
        Ok(result) => result,
        Err(e) => return Ok(fail(JsonError::new(e.code(), e.to_string()), EXIT_FAILED)),
    };

    if let Err(e) = write_bytes_to_file(Path::new(&output_path), &result.wav.wav_data) {
        let error = JsonError::new(error_codes::FILE_WRITE, e.to_string()).with_file(&output_path);
        return Ok(fail(error, EXIT_FAILED));
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    debug!(output = %output_path, duration_ms, "generate finished");

    let summary = GenerateResult {
        output_path: output_path.clone(),
        num_layers: result.num_layers,
        num_samples: result.wav.num_samples,
        sample_rate: result.wav.sample_rate,
        bytes_per_sample: result.wav.bytes_per_sample,
        duration_seconds: result.wav.duration_seconds(),
        size_bytes: result.wav.wav_data.len(),
        pcm_hash: result.wav.pcm_hash.clone(),
        duration_ms,
    };

    if json_output {
        print_json(&GenerateOutput::success(summary, warnings, spec_hash));
    } else {
        print_validation_messages(&validation);
        println!(
            "\n{} Wrote {} ({} layer(s), {} samples, {:.3}s, {}ms)",
            "SUCCESS".green().bold(),
            summary.output_path,
            summary.num_layers,
            summary.num_samples,
            summary.duration_seconds,
            duration_ms
        );
        println!("{} {}", "PCM hash:".dimmed(), summary.pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}
