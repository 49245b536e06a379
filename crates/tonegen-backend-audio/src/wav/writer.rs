//! Sample-to-WAV encoding and file output.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::AudioResult;

use super::format::WavFormat;
use super::header::{WavHeader, HEADER_LEN};
use super::quantize::samples_to_pcm;

/// Appends one silent sample when the count is odd.
///
/// The data chunk length must be a multiple of two bytes, including at
/// 8 bits per sample.
pub fn pad_to_even(samples: &[f64]) -> Cow<'_, [f64]> {
    if samples.len() % 2 == 1 {
        let mut padded = Vec::with_capacity(samples.len() + 1);
        padded.extend_from_slice(samples);
        padded.push(0.0);
        Cow::Owned(padded)
    } else {
        Cow::Borrowed(samples)
    }
}

/// Encodes normalized samples into a complete WAV file.
///
/// # Arguments
/// * `samples` - Mono samples, nominally in [-1.0, 1.0]
/// * `channel_count` - Must be 1; larger values are unsupported
/// * `sample_rate` - Sample rate in Hz
/// * `bytes_per_sample` - 1 (8-bit) or 2 (16-bit)
///
/// # Returns
/// The header followed by signed little-endian PCM data. Nothing is
/// produced unless every check passes.
///
/// # Example
/// ```
/// use tonegen_backend_audio::wav::encode_wav;
///
/// let wav = encode_wav(&[0.0, 1.0], 1, 44100, 2).unwrap();
/// assert_eq!(wav.len(), 48);
/// assert_eq!(&wav[0..4], b"RIFF");
/// assert!(encode_wav(&[0.0, 1.0], 2, 44100, 2).is_err());
/// ```
pub fn encode_wav(
    samples: &[f64],
    channel_count: u32,
    sample_rate: u32,
    bytes_per_sample: u32,
) -> AudioResult<Vec<u8>> {
    let format = WavFormat::new(channel_count, sample_rate, bytes_per_sample)?;
    encode_with_format(samples, &format)
}

/// Encodes samples with an already checked format.
pub fn encode_with_format(samples: &[f64], format: &WavFormat) -> AudioResult<Vec<u8>> {
    if samples.len() % 2 == 1 {
        warn!(
            num_samples = samples.len(),
            "odd sample count, appending one silent sample"
        );
    }
    let samples = pad_to_even(samples);

    let data_length = samples.len() as u64 * u64::from(format.bytes_per_sample);
    let header = WavHeader::new(*format, data_length)?;
    let pcm = samples_to_pcm(&samples, format);

    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm.len());
    header
        .write_to(&mut buffer)
        .expect("writing to Vec should not fail");
    buffer.extend_from_slice(&pcm);

    info!(
        num_samples = samples.len(),
        sample_rate = format.sample_rate,
        bits_per_sample = format.bits_per_sample(),
        bytes = buffer.len(),
        "encoded WAV"
    );

    Ok(buffer)
}

/// Encodes samples and writes the WAV bytes to `writer`.
///
/// Encoding completes before the first byte is written, so a rejected
/// configuration leaves the writer untouched.
pub fn write_wav<W: Write>(
    writer: &mut W,
    samples: &[f64],
    channel_count: u32,
    sample_rate: u32,
    bytes_per_sample: u32,
) -> AudioResult<()> {
    let bytes = encode_wav(samples, channel_count, sample_rate, bytes_per_sample)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Encodes samples and saves them as a WAV file at `path`.
///
/// The file is only created once encoding has succeeded. If writing fails
/// part way, the partial file is removed before the error is returned.
pub fn save_wav_file(
    path: impl AsRef<Path>,
    samples: &[f64],
    channel_count: u32,
    sample_rate: u32,
    bytes_per_sample: u32,
) -> AudioResult<()> {
    let bytes = encode_wav(samples, channel_count, sample_rate, bytes_per_sample)?;
    write_bytes_to_file(path.as_ref(), &bytes)
}

/// Writes already encoded WAV bytes to `path`.
///
/// A file that cannot be created is left untouched. Once created, a failed
/// write or flush removes it.
pub fn write_bytes_to_file(path: &Path, bytes: &[u8]) -> AudioResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let result = writer.write_all(bytes).and_then(|()| writer.flush());

    if let Err(e) = result {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(
                path = %path.display(),
                error = %remove_err,
                "could not remove partial WAV file"
            );
        }
        return Err(e.into());
    }

    info!(path = %path.display(), bytes = bytes.len(), "wrote WAV file");
    Ok(())
}
