//! End-to-end tests for the command implementations.

use pretty_assertions::assert_eq;
use std::process::ExitCode;
use tonegen_cli::commands::{generate, inspect, tone, validate, EXIT_INVALID};

const SPEC: &str = r#"{
    "sample_rate": 8000,
    "duration_seconds": 0.25,
    "layers": [
        { "type": "sine", "frequency": 440.0, "amplitude": 0.5 },
        { "type": "fluctuating_sine", "starting_freq": 400.0, "ending_freq": 600.0,
          "pulse_freq": 4.0, "amplitude": 0.4, "duration_seconds": 0.5 }
    ]
}"#;

#[test]
fn validate_generate_inspect() {
    let tmp = tempfile::tempdir().unwrap();
    let spec_path = tmp.path().join("tone.json");
    let wav_path = tmp.path().join("tone.wav");
    std::fs::write(&spec_path, SPEC).unwrap();
    let spec_path = spec_path.to_str().unwrap();
    let wav_path = wav_path.to_str().unwrap();

    assert_eq!(validate::run(spec_path, true).unwrap(), ExitCode::SUCCESS);
    assert_eq!(
        generate::run(spec_path, Some(wav_path), false).unwrap(),
        ExitCode::SUCCESS
    );

    let info = inspect::inspect_file(wav_path).unwrap();
    assert_eq!(info.sample_rate, 8000);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_samples, 4000);
    assert!(info.peak <= 1.0);
}

#[test]
fn generate_is_reproducible() {
    let tmp = tempfile::tempdir().unwrap();
    let spec_path = tmp.path().join("tone.json");
    std::fs::write(&spec_path, SPEC).unwrap();

    let a = tmp.path().join("a.wav");
    let b = tmp.path().join("b.wav");
    for out in [&a, &b] {
        let code = generate::run(spec_path.to_str().unwrap(), out.to_str(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn output_must_be_wav() {
    let tmp = tempfile::tempdir().unwrap();
    let spec_path = tmp.path().join("tone.json");
    std::fs::write(&spec_path, SPEC).unwrap();
    let out = tmp.path().join("tone.mp3");

    let code = generate::run(spec_path.to_str().unwrap(), out.to_str(), true).unwrap();
    assert_eq!(code, ExitCode::from(EXIT_INVALID));
    assert!(!out.exists());
}

#[test]
fn tone_8_bit_triangle() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("tri.wav");
    let args = tone::ToneArgs {
        waveform: tone::Waveform::Triangle,
        output: out.to_str().unwrap().to_string(),
        frequency: 100.0,
        amplitude: 1.0,
        duration: 0.1,
        sample_rate: 8000,
        bytes_per_sample: 1,
        starting_freq: None,
        ending_freq: None,
        pulse_freq: None,
    };

    assert_eq!(tone::run(&args, false).unwrap(), ExitCode::SUCCESS);
    let info = inspect::inspect_file(out.to_str().unwrap()).unwrap();
    assert_eq!(info.bits_per_sample, 8);
    assert_eq!(info.num_samples, 800);
}
