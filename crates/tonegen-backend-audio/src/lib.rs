//! tonegen Audio Backend
//!
//! This crate renders simple periodic waveforms and encodes them as mono
//! PCM WAV files.
//!
//! # Overview
//!
//! Three generators are provided, each a pure function of time:
//!
//! - **Sine** - `amplitude * sin(2*pi*f*t)`
//! - **Triangle** - piecewise-linear, four equal regions per period
//! - **Fluctuating sine** - a sine whose frequency warbles at a pulse rate
//!
//! Sequences of any length can be mixed additively with hard clipping and
//! written as 8-bit or 16-bit signed little-endian PCM.
//!
//! # Determinism
//!
//! There is no randomness and no metadata in the output. The same spec
//! always produces byte-identical WAV data.
//!
//! # Example
//!
//! ```
//! use tonegen_backend_audio::generate;
//! use tonegen_spec::{Layer, RenderSpec};
//!
//! let spec = RenderSpec::builder()
//!     .sample_rate(8000)
//!     .duration_seconds(0.25)
//!     .layer(Layer::sine(440.0, 0.5))
//!     .output("a440.wav")
//!     .build();
//!
//! let result = generate(&spec).unwrap();
//! assert_eq!(result.wav.num_samples, 2000);
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Render a [`tonegen_spec::RenderSpec`] to WAV bytes
//! - [`synthesis`] - Waveform generators
//! - [`mixer`] - Additive mixing with clipping
//! - [`wav`] - PCM WAV encoding and decoding

pub mod error;
pub mod generate;
pub mod mixer;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate, render_layer, GenerateResult};
pub use mixer::{mix_all, transpose_samples};
pub use synthesis::{fluctuating_sine_wave, sine_wave, triangle_wave, Synthesizer};
pub use wav::{encode_wav, save_wav_file, write_wav, WavResult};
