//! Error types for the audio backend.

use thiserror::Error;
use tonegen_spec::BackendError;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis and WAV encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// More than one channel was requested; interleaving is not supported.
    #[error("unsupported channel count: {channels} (only mono PCM is supported)")]
    UnsupportedChannelCount {
        /// The requested channel count.
        channels: u32,
    },

    /// Bytes per sample outside 1..=2.
    #[error("invalid bytes per sample: {bytes} (expected 1 or 2)")]
    InvalidBytesPerSample {
        /// The requested width in bytes.
        bytes: u32,
    },

    /// The data chunk would be empty.
    #[error("cannot encode an empty sample sequence")]
    EmptyData,

    /// The data chunk length is not a multiple of two bytes.
    #[error("data length {length} is not a multiple of 2 bytes")]
    OddDataLength {
        /// Data chunk length in bytes.
        length: u64,
    },

    /// A header field does not fit its on-disk width.
    #[error("header field '{field}' out of range: {value}")]
    HeaderFieldOutOfRange {
        /// Name of the header field.
        field: &'static str,
        /// The computed value.
        value: u64,
    },

    /// A WAV buffer could not be parsed.
    #[error("malformed WAV data: {message}")]
    MalformedWav {
        /// Description of the problem.
        message: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed WAV error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedWav {
            message: message.into(),
        }
    }

    /// Returns true for configurations the encoder declines to handle, as
    /// opposed to violated preconditions or I/O failures.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, AudioError::UnsupportedChannelCount { .. })
    }

    /// Returns true for violated encoder preconditions.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AudioError::InvalidBytesPerSample { .. }
                | AudioError::EmptyData
                | AudioError::OddDataLength { .. }
                | AudioError::HeaderFieldOutOfRange { .. }
        )
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::UnsupportedChannelCount { .. } => "AUDIO_001",
            AudioError::InvalidBytesPerSample { .. } => "AUDIO_002",
            AudioError::EmptyData => "AUDIO_003",
            AudioError::OddDataLength { .. } => "AUDIO_004",
            AudioError::HeaderFieldOutOfRange { .. } => "AUDIO_005",
            AudioError::MalformedWav { .. } => "AUDIO_006",
            AudioError::InvalidParameter { .. } => "AUDIO_007",
            AudioError::Io(_) => "AUDIO_008",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
