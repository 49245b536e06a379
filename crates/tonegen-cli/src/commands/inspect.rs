//! Inspect command implementation
//!
//! Parses a WAV file and prints its header fields and level statistics.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tonegen_backend_audio::wav::{compute_pcm_hash, decode_wav};

use super::json_output::{error_codes, print_json, InspectOutput, InspectResult, JsonError};
use super::reporting::print_failure;
use super::EXIT_INVALID;

/// Reads and summarizes a WAV file.
pub fn inspect_file(path: &str) -> std::result::Result<InspectResult, JsonError> {
    let bytes = std::fs::read(path)
        .map_err(|e| JsonError::new(error_codes::FILE_READ, e.to_string()).with_file(path))?;
    inspect_bytes(path, &bytes)
}

/// Summarizes WAV bytes read from `path`.
pub fn inspect_bytes(path: &str, bytes: &[u8]) -> std::result::Result<InspectResult, JsonError> {
    let decoded = decode_wav(bytes)
        .map_err(|e| JsonError::new(error_codes::INVALID_WAV, e.to_string()).with_file(path))?;
    let header = decoded.header;

    Ok(InspectResult {
        path: path.to_string(),
        chunk_size: header.chunk_size,
        channels: header.format.channels,
        sample_rate: header.format.sample_rate,
        bits_per_sample: header.format.bits_per_sample(),
        byte_rate: header.byte_rate,
        block_align: header.block_align,
        data_length: header.data_length,
        num_samples: decoded.samples.len(),
        duration_seconds: decoded.duration_seconds(),
        peak: decoded.peak(),
        pcm_hash: compute_pcm_hash(bytes).unwrap_or_default(),
    })
}

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 if the file parsed, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let result = inspect_file(input);

    if json_output {
        let code = if result.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(EXIT_INVALID)
        };
        let output = match result {
            Ok(result) => InspectOutput::success(result),
            Err(error) => InspectOutput::failure(error),
        };
        print_json(&output);
        return Ok(code);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    let info = match result {
        Ok(info) => info,
        Err(error) if error.code == error_codes::FILE_READ => {
            anyhow::bail!("Failed to read WAV file: {}: {}", input, error.message);
        }
        Err(error) => {
            print_failure(&error.code, &error.message);
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    let peak_dbfs = if info.peak > 0.0 {
        format!("{:.2} dBFS", 20.0 * info.peak.log10())
    } else {
        "-inf dBFS".to_string()
    };

    println!("  {:<16}{}", "Channels:".dimmed(), info.channels);
    println!("  {:<16}{} Hz", "Sample rate:".dimmed(), info.sample_rate);
    println!("  {:<16}{}", "Bits/sample:".dimmed(), info.bits_per_sample);
    println!("  {:<16}{}", "Byte rate:".dimmed(), info.byte_rate);
    println!("  {:<16}{}", "Block align:".dimmed(), info.block_align);
    println!("  {:<16}{} bytes", "Data length:".dimmed(), info.data_length);
    println!("  {:<16}{}", "Samples:".dimmed(), info.num_samples);
    println!("  {:<16}{:.3}s", "Duration:".dimmed(), info.duration_seconds);
    println!("  {:<16}{:.4} ({})", "Peak:".dimmed(), info.peak, peak_dbfs);
    println!("  {:<16}{}", "PCM hash:".dimmed(), info.pcm_hash);

    Ok(ExitCode::SUCCESS)
}
