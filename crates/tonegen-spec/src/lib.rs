//! tonegen Render Spec Library
//!
//! This crate provides types, validation, and hashing for tonegen render
//! specs. A render spec is a JSON document describing waveform layers and the
//! PCM format of a single WAV file.
//!
//! # Example
//!
//! ```
//! use tonegen_spec::{Layer, RenderSpec};
//! use tonegen_spec::validation::validate_spec;
//! use tonegen_spec::hash::canonical_spec_hash;
//!
//! let spec = RenderSpec::builder()
//!     .sample_rate(44100)
//!     .duration_seconds(1.0)
//!     .layer(Layer::sine(440.0, 0.5))
//!     .layer(Layer::triangle(220.0, 0.3).with_duration(0.5))
//!     .output("tone.wav")
//!     .build();
//!
//! assert!(validate_spec(&spec).is_ok());
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`layer`]: Waveform layer types
//! - [`spec`]: Main spec type and builder
//! - [`validation`]: Spec validation functions
//! - [`hash`]: Canonical hashing

pub mod error;
pub mod hash;
pub mod layer;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::canonical_spec_hash;
pub use layer::Layer;
pub use spec::{
    RenderSpec, RenderSpecBuilder, DEFAULT_BYTES_PER_SAMPLE, DEFAULT_CHANNELS,
    DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE,
};
pub use validation::validate_spec;
