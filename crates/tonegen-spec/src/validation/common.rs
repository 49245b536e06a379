//! Common validation utilities for numeric parameters.

use std::fmt;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is positive (> 0).
///
/// # Example
/// ```
/// use tonegen_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("frequency", 440.0).is_ok());
/// assert!(validate_positive("frequency", 0.0).is_err());
/// assert!(validate_positive("frequency", f64::NAN).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite.
///
/// # Example
/// ```
/// use tonegen_spec::validation::common::validate_finite;
///
/// assert!(validate_finite("amplitude", -0.5).is_ok());
/// assert!(validate_finite("amplitude", f64::INFINITY).is_err());
/// ```
pub fn validate_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value lies in an inclusive range.
///
/// # Example
/// ```
/// use tonegen_spec::validation::common::validate_range;
///
/// assert!(validate_range("bytes_per_sample", 2.0, 1.0, 2.0).is_ok());
/// assert!(validate_range("bytes_per_sample", 3.0, 1.0, 2.0).is_err());
/// ```
pub fn validate_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if !(min..=max).contains(&value) {
        return Err(CommonValidationError::new(format!(
            "{} must be in [{}, {}], got {}",
            name, min, max, value
        )));
    }
    Ok(())
}
