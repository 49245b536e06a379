//! Cross-checks encoded files against an independent WAV reader.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use tonegen_backend_audio::synthesis::{sine_wave, triangle_wave};
use tonegen_backend_audio::wav::{encode_wav, quantize_sample, save_wav_file, WavFormat};

#[test]
fn test_hound_reads_16_bit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sine.wav");
    let samples = sine_wave(440.0, 0.8, 0.05, 44100);

    save_wav_file(&path, &samples, 1, 44100, 2).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let format = WavFormat::mono(44100, 2).unwrap();
    let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    let expected: Vec<i16> = samples
        .iter()
        .map(|&s| quantize_sample(s, &format) as i16)
        .collect();

    assert_eq!(read.len(), samples.len() + samples.len() % 2);
    assert_eq!(&read[..samples.len()], expected.as_slice());
}

#[test]
fn test_hound_reads_8_bit_header() {
    let samples = triangle_wave(100.0, 0.5, 0.01, 8000);
    let wav = encode_wav(&samples, 1, 8000, 1).unwrap();

    let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 8000);
    assert_eq!(spec.bits_per_sample, 8);
    assert_eq!(reader.len() as usize, samples.len());
}

#[test]
fn test_8_bit_samples_are_signed() {
    // Standard readers treat 8-bit data as unsigned with a 128 offset, so a
    // signed value v reads back as (v as u8).wrapping_sub(128).
    let samples = [-1.0, 0.0, 1.0, 0.5];
    let wav = encode_wav(&samples, 1, 8000, 1).unwrap();
    let format = WavFormat::mono(8000, 1).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
    let read: Vec<i8> = reader.samples::<i8>().map(|s| s.unwrap()).collect();
    let expected: Vec<i8> = samples
        .iter()
        .map(|&s| ((quantize_sample(s, &format) as i8) as u8).wrapping_sub(128) as i8)
        .collect();

    assert_eq!(read, expected);
}

#[test]
fn test_hound_duration_matches() {
    let samples = sine_wave(220.0, 0.5, 0.2, 22050);
    let wav = encode_wav(&samples, 1, 22050, 2).unwrap();

    let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
    assert_eq!(reader.duration() as usize, samples.len());
}
