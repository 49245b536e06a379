//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and prints exactly one of these documents
//! to stdout.

use serde::{Deserialize, Serialize};
use tonegen_spec::{SpecError, ValidationError, ValidationResult, ValidationWarning};

/// Error codes for CLI operations.
///
/// Validation failures pass through the spec's own codes (`E001`...);
/// backend failures pass through `AUDIO_XXX`.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Spec has no output path and none was given
    pub const NO_OUTPUT: &str = "CLI_004";
    /// Command-line arguments are inconsistent
    pub const INVALID_ARGS: &str = "CLI_005";
    /// WAV file could not be parsed
    pub const INVALID_WAV: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "AUDIO_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Canonical spec hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
}

impl ValidateOutput {
    /// Builds the output from a validation result.
    pub fn from_validation(validation: &ValidationResult, spec_hash: Option<String>) -> Self {
        let (errors, warnings) = validation_to_json(validation);
        Self {
            success: validation.is_ok(),
            errors,
            warnings,
            spec_hash,
        }
    }

    /// Creates a failed output for a spec that could not be loaded.
    pub fn load_failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            warnings: Vec::new(),
            spec_hash: None,
        }
    }
}

/// JSON output for the `generate` and `tone` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered during generation
    pub errors: Vec<JsonError>,
    /// Warnings from validation
    pub warnings: Vec<JsonWarning>,
    /// Generation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    /// Canonical spec hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
}

/// Details of a written WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    /// Path the WAV file was written to
    pub output_path: String,
    /// Number of layers mixed
    pub num_layers: usize,
    /// Number of samples written
    pub num_samples: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bytes per sample
    pub bytes_per_sample: u16,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// File size in bytes
    pub size_bytes: usize,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
    /// Wall-clock time in milliseconds
    pub duration_ms: u64,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(
        result: GenerateResult,
        warnings: Vec<JsonWarning>,
        spec_hash: Option<String>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            spec_hash,
        }
    }

    /// Creates a failed generate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        spec_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            spec_hash,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the file was parsed
    pub success: bool,
    /// Errors encountered while reading
    pub errors: Vec<JsonError>,
    /// Parsed details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Header fields and summary statistics of a WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Path of the inspected file
    pub path: String,
    /// RIFF chunk size
    pub chunk_size: u32,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Bytes per second
    pub byte_rate: u32,
    /// Bytes per sample frame
    pub block_align: u16,
    /// Length of the data chunk in bytes
    pub data_length: u32,
    /// Number of samples
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Largest absolute sample value in [0.0, 1.0]
    pub peak: f64,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            result: None,
        }
    }
}

/// Converts a SpecError raised while loading `file` to a JsonError.
pub fn spec_error_to_json(err: &SpecError, file: &str) -> JsonError {
    let code = match err {
        SpecError::Io(_) => error_codes::FILE_READ,
        SpecError::JsonParse(_) => error_codes::JSON_PARSE,
    };
    JsonError::new(code, err.to_string()).with_file(file)
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warn.code.to_string(),
        message: warn.message.clone(),
        path: warn.path.clone(),
    }
}

/// Converts every error and warning of a validation result.
pub fn validation_to_json(validation: &ValidationResult) -> (Vec<JsonError>, Vec<JsonWarning>) {
    let errors = validation.errors.iter().map(validation_error_to_json).collect();
    let warnings = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();
    (errors, warnings)
}

/// Prints a JSON document to stdout.
pub fn print_json<T: Serialize>(output: &T) {
    let json = serde_json::to_string_pretty(output).expect("CLI output serialization should not fail");
    println!("{}", json);
}
