//! Validate command implementation
//!
//! Validates a spec file and prints its errors and warnings.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use tonegen_spec::{canonical_spec_hash, validate_spec, RenderSpec};

use super::json_output::{print_json, spec_error_to_json, ValidateOutput};
use super::reporting::print_validation_messages;
use super::EXIT_INVALID;

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the JSON render spec
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(spec_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let spec = RenderSpec::from_file(spec_path)
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;

    let spec_hash = canonical_spec_hash(&spec).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Spec hash:".dimmed(), spec_hash);
    println!(
        "{} {} Hz, {}-bit, {} layer(s), {:.3}s",
        "Format:".dimmed(),
        spec.sample_rate,
        u32::from(spec.bytes_per_sample) * 8,
        spec.layers.len(),
        spec.total_duration_seconds()
    );

    let validation = validate_spec(&spec);
    print_validation_messages(&validation);

    if validation.is_ok() {
        println!("\n{} Spec is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Spec has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        Ok(ExitCode::from(EXIT_INVALID))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(spec_path: &str) -> Result<ExitCode> {
    let spec = match RenderSpec::from_file(spec_path) {
        Ok(spec) => spec,
        Err(e) => {
            print_json(&ValidateOutput::load_failure(spec_error_to_json(&e, spec_path)));
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    let validation = validate_spec(&spec);
    let output = ValidateOutput::from_validation(&validation, canonical_spec_hash(&spec).ok());
    print_json(&output);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonegen_spec::Layer;

    fn write_spec(dir: &tempfile::TempDir, filename: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(filename);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn validate_valid_spec() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = RenderSpec::builder()
            .layer(Layer::sine(440.0, 0.5))
            .output("a.wav")
            .build();
        let path = write_spec(&tmp, "spec.json", &spec.to_json_pretty().unwrap());

        assert_eq!(run(path.to_str().unwrap(), false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn validate_warnings_do_not_fail() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = RenderSpec::builder().layer(Layer::sine(440.0, 1.5)).build();
        let path = write_spec(&tmp, "spec.json", &spec.to_json_pretty().unwrap());

        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn validate_invalid_spec() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_spec(&tmp, "spec.json", r#"{ "layers": [] }"#);

        assert_eq!(
            run(path.to_str().unwrap(), false).unwrap(),
            ExitCode::from(EXIT_INVALID)
        );
    }

    #[test]
    fn validate_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_spec(&tmp, "spec.json", "{ not json");

        assert!(run(path.to_str().unwrap(), false).is_err());
        assert_eq!(
            run(path.to_str().unwrap(), true).unwrap(),
            ExitCode::from(EXIT_INVALID)
        );
    }

    #[test]
    fn validate_json_output_failure() {
        let code = run("/nonexistent/spec.json", true).unwrap();
        assert_eq!(code, ExitCode::from(EXIT_INVALID));
    }
}
