//! # Validation Utilities
//!
//! Input validation helpers. Errors are plain strings ready to show in a notice.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that `value` is exactly `len` ASCII digits.
pub fn validate_digits(value: &str, len: usize, field_name: &str) -> Result<(), String> {
    if value.len() == len && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{} must be {} digits", field_name, len))
    }
}

/// Validate that `value` lies in the inclusive range `min..=max`.
pub fn validate_in_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        Err(format!("{} must be between {} and {}", field_name, min, max))
    } else {
        Ok(())
    }
}
