//! Validation helper functions for configuration types.

use std::path::Path;

use crate::core::errors::{Result, SieveError};

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(SieveError::validation_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a path is not empty.
pub fn validate_non_empty_path(path: &Path, field: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(SieveError::config_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}
