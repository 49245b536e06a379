//! CLI command implementations

pub mod generate;
pub mod inspect;
pub mod json_output;
pub mod tone;
pub mod validate;

mod reporting;

/// Exit code for invalid input: unreadable or invalid specs and bad arguments.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for failures while rendering or writing output.
pub const EXIT_FAILED: u8 = 2;
