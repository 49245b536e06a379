//! In-memory WAV output.

use crate::error::AudioResult;

use super::format::WavFormat;
use super::pcm::compute_pcm_hash;
use super::writer::encode_with_format;

/// An encoded WAV file together with a content hash.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per sample.
    pub bytes_per_sample: u16,
    /// Number of samples written, including any padding sample.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32, bytes_per_sample: u32) -> AudioResult<Self> {
        let format = WavFormat::mono(sample_rate, bytes_per_sample)?;
        let wav_data = encode_with_format(samples, &format)?;
        let pcm_hash = compute_pcm_hash(&wav_data).unwrap_or_default();
        let num_samples = samples.len() + samples.len() % 2;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            bytes_per_sample: format.bytes_per_sample,
            num_samples,
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / f64::from(self.sample_rate)
    }
}
