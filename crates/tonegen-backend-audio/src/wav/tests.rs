//! Tests for the WAV encoder.

use pretty_assertions::assert_eq;

use crate::error::AudioError;

use super::format::WavFormat;
use super::header::{WavHeader, HEADER_LEN};
use super::pcm::{compute_pcm_hash, decode_wav, extract_pcm_data};
use super::result::WavResult;
use super::writer::{encode_wav, pad_to_even, save_wav_file, write_bytes_to_file, write_wav};

// =========================================================================
// Header layout
// =========================================================================

#[test]
fn test_single_silent_sample_exact_bytes() {
    let wav = encode_wav(&[0.0], 1, 44100, 2).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(b"RIFF");
    expected.extend_from_slice(&[0x28, 0x00, 0x00, 0x00]);
    expected.extend_from_slice(b"WAVE");
    expected.extend_from_slice(b"fmt ");
    expected.extend_from_slice(&[0x10, 0x00, 0x00, 0x00]);
    expected.extend_from_slice(&[0x01, 0x00, 0x01, 0x00]);
    expected.extend_from_slice(&[0x44, 0xAC, 0x00, 0x00]);
    expected.extend_from_slice(&[0x88, 0x58, 0x01, 0x00]);
    expected.extend_from_slice(&[0x02, 0x00, 0x10, 0x00]);
    expected.extend_from_slice(b"data");
    expected.extend_from_slice(&[0x04, 0x00, 0x00, 0x00]);
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    assert_eq!(wav, expected);
}

#[test]
fn test_header_fields_16_bit() {
    let wav = encode_wav(&[0.0; 100], 1, 48000, 2).unwrap();
    let header = WavHeader::parse(&wav).unwrap();

    assert_eq!(header.chunk_size, 36 + 200);
    assert_eq!(header.format.channels, 1);
    assert_eq!(header.format.sample_rate, 48000);
    assert_eq!(header.byte_rate, 96000);
    assert_eq!(header.block_align, 2);
    assert_eq!(header.format.bits_per_sample(), 16);
    assert_eq!(header.data_length, 200);
    assert_eq!(wav.len(), HEADER_LEN + 200);
}

#[test]
fn test_header_fields_8_bit() {
    let wav = encode_wav(&[0.25; 10], 1, 8000, 1).unwrap();
    let header = WavHeader::parse(&wav).unwrap();

    assert_eq!(header.byte_rate, 8000);
    assert_eq!(header.block_align, 1);
    assert_eq!(header.format.bits_per_sample(), 8);
    assert_eq!(header.data_length, 10);
}

#[test]
fn test_header_to_bytes_matches_prefix() {
    let wav = encode_wav(&[0.5, -0.5], 1, 22050, 2).unwrap();
    let header = WavHeader::parse(&wav).unwrap();
    assert_eq!(header.to_bytes(), wav[..HEADER_LEN].to_vec());
}

// =========================================================================
// Padding
// =========================================================================

#[test]
fn test_odd_count_is_padded_8_bit() {
    let wav = encode_wav(&[1.0, 1.0, 1.0], 1, 8000, 1).unwrap();
    let pcm = extract_pcm_data(&wav).unwrap();
    assert_eq!(pcm, &[0x7F, 0x7F, 0x7F, 0x00]);
}

#[test]
fn test_even_count_not_padded() {
    let samples = [0.1, 0.2];
    assert_eq!(pad_to_even(&samples).len(), 2);
    assert_eq!(pad_to_even(&samples[..1]).as_ref(), &[0.1, 0.0]);
}

// =========================================================================
// Configuration errors
// =========================================================================

#[test]
fn test_stereo_is_unsupported() {
    let err = encode_wav(&[0.0, 0.0], 2, 44100, 2).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_empty_input_rejected() {
    let err = encode_wav(&[], 1, 44100, 2).unwrap_err();
    assert!(matches!(err, AudioError::EmptyData));
}

#[test]
fn test_unsupported_width_rejected() {
    let err = encode_wav(&[0.0, 0.0], 1, 44100, 3).unwrap_err();
    assert!(matches!(err, AudioError::InvalidBytesPerSample { bytes: 3 }));
}

#[test]
fn test_zero_sample_rate_rejected() {
    let err = encode_wav(&[0.0, 0.0], 1, 0, 2).unwrap_err();
    assert!(matches!(
        err,
        AudioError::HeaderFieldOutOfRange {
            field: "SampleRate",
            ..
        }
    ));
}

#[test]
fn test_zero_channels_rejected() {
    let err = encode_wav(&[0.0, 0.0], 0, 44100, 2).unwrap_err();
    assert!(matches!(
        err,
        AudioError::HeaderFieldOutOfRange {
            field: "NumChannels",
            ..
        }
    ));
}

#[test]
fn test_header_check_order() {
    let format = WavFormat::mono(44100, 2).unwrap();

    assert!(matches!(
        WavHeader::new(format, 0).unwrap_err(),
        AudioError::EmptyData
    ));
    assert!(matches!(
        WavHeader::new(format, 3).unwrap_err(),
        AudioError::OddDataLength { length: 3 }
    ));
    assert!(matches!(
        WavHeader::new(format, u64::from(u32::MAX) - 1).unwrap_err(),
        AudioError::HeaderFieldOutOfRange {
            field: "ChunkSize",
            ..
        }
    ));
}

#[test]
fn test_byte_rate_overflow() {
    let format = WavFormat::mono(u32::MAX, 2).unwrap();
    let err = WavHeader::new(format, 2).unwrap_err();
    assert!(matches!(
        err,
        AudioError::HeaderFieldOutOfRange {
            field: "ByteRate",
            ..
        }
    ));
}

// =========================================================================
// Writers
// =========================================================================

#[test]
fn test_write_wav_matches_encode() {
    let samples = [0.0, 0.5, -0.5, 1.0];
    let mut buffer = Vec::new();
    write_wav(&mut buffer, &samples, 1, 44100, 2).unwrap();
    assert_eq!(buffer, encode_wav(&samples, 1, 44100, 2).unwrap());
}

#[test]
fn test_write_wav_leaves_writer_untouched_on_error() {
    let mut buffer = Vec::new();
    assert!(write_wav(&mut buffer, &[0.0, 0.0], 2, 44100, 2).is_err());
    assert!(buffer.is_empty());
}

#[test]
fn test_save_wav_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let samples = [0.0, 0.25, 0.5, 0.75];

    save_wav_file(&path, &samples, 1, 44100, 2).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, encode_wav(&samples, 1, 44100, 2).unwrap());
}

#[test]
fn test_save_wav_file_rejected_config_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");

    assert!(save_wav_file(&path, &[0.0, 0.0], 2, 44100, 2).is_err());
    assert!(!path.exists());
}

#[test]
fn test_save_wav_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("tone.wav");

    let err = save_wav_file(&path, &[0.0, 0.0], 1, 44100, 2).unwrap_err();
    assert!(matches!(err, AudioError::Io(_)));
}

#[cfg(unix)]
#[test]
fn test_failed_create_keeps_existing_entry() {
    // Creating through a link into a missing directory fails, but the link
    // itself could still be unlinked.
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("tone.wav");
    std::os::unix::fs::symlink(dir.path().join("missing").join("target.wav"), &link).unwrap();

    let err = write_bytes_to_file(&link, &[0u8; 4]).unwrap_err();
    assert!(matches!(err, AudioError::Io(_)));
    assert!(std::fs::symlink_metadata(&link).is_ok());
}

#[test]
fn test_write_bytes_to_file_replaces_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    std::fs::write(&path, b"old contents that are longer").unwrap();

    write_bytes_to_file(&path, b"new").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"new".to_vec());
}

// =========================================================================
// Reading back
// =========================================================================

#[test]
fn test_decode_round_trip_16_bit() {
    let samples: Vec<f64> = (0..64).map(|i| (i as f64 / 32.0) - 1.0).collect();
    let wav = encode_wav(&samples, 1, 44100, 2).unwrap();
    let decoded = decode_wav(&wav).unwrap();

    assert_eq!(decoded.samples.len(), samples.len());
    let step = 2.0 / 65535.0;
    for (original, restored) in samples.iter().zip(&decoded.samples) {
        assert!((original - restored).abs() <= step);
    }
}

#[test]
fn test_decode_8_bit() {
    let wav = encode_wav(&[-1.0, 1.0], 1, 8000, 1).unwrap();
    let decoded = decode_wav(&wav).unwrap();
    assert_eq!(decoded.samples, vec![-1.0, 1.0]);
    assert_eq!(decoded.sample_rate(), 8000);
    assert_eq!(decoded.peak(), 1.0);
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(matches!(
        decode_wav(b"not a wav file").unwrap_err(),
        AudioError::MalformedWav { .. }
    ));

    let mut wav = encode_wav(&[0.0, 0.0], 1, 44100, 2).unwrap();
    wav[8..12].copy_from_slice(b"AVI ");
    assert!(matches!(
        decode_wav(&wav).unwrap_err(),
        AudioError::MalformedWav { .. }
    ));
}

#[test]
fn test_decode_rejects_truncated_data() {
    let wav = encode_wav(&[0.0; 8], 1, 44100, 2).unwrap();
    let truncated = &wav[..wav.len() - 2];
    assert!(decode_wav(truncated).is_err());
}

#[test]
fn test_extract_pcm_skips_extra_chunks() {
    let wav = encode_wav(&[0.5, -0.5], 1, 44100, 2).unwrap();
    let pcm = extract_pcm_data(&wav).unwrap().to_vec();

    // RIFF/WAVE, fmt chunk, a 3-byte LIST chunk plus pad byte, then data.
    let mut with_list = wav[..36].to_vec();
    with_list.extend_from_slice(b"LIST");
    with_list.extend_from_slice(&3u32.to_le_bytes());
    with_list.extend_from_slice(&[1, 2, 3, 0]);
    with_list.extend_from_slice(&wav[36..]);

    assert_eq!(extract_pcm_data(&with_list).unwrap(), pcm.as_slice());
}

// =========================================================================
// WavResult
// =========================================================================

#[test]
fn test_wav_result_from_mono() {
    let samples = vec![0.0; 441];
    let result = WavResult::from_mono(&samples, 44100, 2).unwrap();

    assert_eq!(result.num_samples, 442);
    assert_eq!(result.bytes_per_sample, 2);
    assert_eq!(result.wav_data.len(), HEADER_LEN + 884);
    assert_eq!(result.pcm_hash.len(), 64);
    assert_eq!(Some(result.pcm_hash.clone()), compute_pcm_hash(&result.wav_data));
    assert!((result.duration_seconds() - 442.0 / 44100.0).abs() < 1e-12);
}

#[test]
fn test_wav_result_is_deterministic() {
    let samples: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
    let a = WavResult::from_mono(&samples, 44100, 2).unwrap();
    let b = WavResult::from_mono(&samples, 44100, 2).unwrap();
    assert_eq!(a.wav_data, b.wav_data);
    assert_eq!(a.pcm_hash, b.pcm_hash);
}
