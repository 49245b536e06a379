//! tonegen CLI library.
//!
//! This crate provides the command implementations behind the `tonegen`
//! binary: rendering specs and single tones, validating specs and
//! inspecting WAV files.

pub mod commands;
pub mod logging;
