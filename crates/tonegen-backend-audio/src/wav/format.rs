//! WAV file format parameters.

use crate::error::{AudioError, AudioResult};

/// Largest supported sample width in bytes.
pub const MAX_BYTES_PER_SAMPLE: u16 = 2;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels. Only mono is encodable.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per sample (1 or 2).
    pub bytes_per_sample: u16,
}

impl WavFormat {
    /// Checks the encoder configuration and builds a format.
    ///
    /// Multi-channel requests are rejected as unsupported before anything
    /// else is looked at; then the sample width must be 1 or 2 bytes.
    /// A zero channel count or sample rate is left for the header checks.
    pub fn new(channels: u32, sample_rate: u32, bytes_per_sample: u32) -> AudioResult<Self> {
        if channels > 1 {
            return Err(AudioError::UnsupportedChannelCount { channels });
        }
        if bytes_per_sample == 0 || bytes_per_sample > u32::from(MAX_BYTES_PER_SAMPLE) {
            return Err(AudioError::InvalidBytesPerSample {
                bytes: bytes_per_sample,
            });
        }

        Ok(Self {
            channels: channels as u16,
            sample_rate,
            bytes_per_sample: bytes_per_sample as u16,
        })
    }

    /// Creates a mono format.
    pub fn mono(sample_rate: u32, bytes_per_sample: u32) -> AudioResult<Self> {
        Self::new(1, sample_rate, bytes_per_sample)
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.bytes_per_sample * 8
    }

    /// Bytes per sample frame across all channels.
    ///
    /// Widened so header checks can detect overflow of the 16-bit field.
    pub fn block_align(&self) -> u64 {
        u64::from(self.channels) * u64::from(self.bytes_per_sample)
    }

    /// Bytes per second.
    ///
    /// Widened so header checks can detect overflow of the 32-bit field.
    pub fn byte_rate(&self) -> u64 {
        u64::from(self.sample_rate) * self.block_align()
    }

    /// Largest representable quantized value.
    pub fn max_sample(&self) -> i32 {
        (1i32 << (u32::from(self.bytes_per_sample) * 8 - 1)) - 1
    }

    /// Smallest representable quantized value.
    pub fn min_sample(&self) -> i32 {
        -self.max_sample() - 1
    }
}
