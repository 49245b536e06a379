//! Reading PCM data back out of encoded WAV bytes.

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::header::{WavHeader, HEADER_LEN};
use super::quantize::dequantize_sample;

/// Returns the body of the first `data` chunk.
///
/// Chunks are walked from offset 12 with word alignment, so files with
/// extra chunks before `data` are also handled. Returns `None` when the
/// RIFF/WAVE tags are missing or the chunk runs past the buffer.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12usize;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size)?;
        if chunk_id == b"data" {
            return wav_data.get(body_start..body_end);
        }

        pos = body_end + chunk_size % 2;
    }

    None
}

/// BLAKE3 hex digest of the PCM data in a WAV buffer.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// A decoded mono WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// The parsed header.
    pub header: WavHeader,
    /// Samples mapped back into [-1.0, 1.0].
    pub samples: Vec<f64>,
}

impl DecodedWav {
    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.header.format.sample_rate
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate())
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |peak, s| peak.max(s.abs()))
    }
}

/// Decodes a WAV buffer in the layout produced by this crate.
pub fn decode_wav(wav_data: &[u8]) -> AudioResult<DecodedWav> {
    let header = WavHeader::parse(wav_data)?;
    let pcm = extract_pcm_data(wav_data)
        .ok_or_else(|| AudioError::malformed("data chunk is truncated"))?;

    let samples = pcm_to_samples(pcm, &header.format);
    Ok(DecodedWav { header, samples })
}

fn pcm_to_samples(pcm: &[u8], format: &WavFormat) -> Vec<f64> {
    match format.bytes_per_sample {
        1 => pcm
            .iter()
            .map(|&b| dequantize_sample(i32::from(b as i8), format))
            .collect(),
        _ => pcm
            .chunks_exact(2)
            .map(|pair| dequantize_sample(i32::from(i16::from_le_bytes([pair[0], pair[1]])), format))
            .collect(),
    }
}
