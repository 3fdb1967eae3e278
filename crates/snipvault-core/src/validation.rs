//! Validation utilities.

use crate::{FieldError, VaultError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `VaultError::Validation` on failure.
    fn validate_request(&self) -> Result<(), VaultError> {
        self.validate().map_err(validation_errors_to_vault_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into per-field errors, sorted by field name.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Converts `validator::ValidationErrors` to `VaultError`.
#[must_use]
pub fn validation_errors_to_vault_error(errors: ValidationErrors) -> VaultError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    VaultError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Longest accepted tag.
    pub const MAX_TAG_LEN: usize = 50;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a tag list: every tag non-blank and at most [`MAX_TAG_LEN`] chars.
    pub fn valid_tags(tags: &[String]) -> Result<(), ValidationError> {
        for tag in tags {
            if tag.trim().is_empty() {
                return Err(ValidationError::new("tag_blank"));
            }
            if tag.chars().count() > MAX_TAG_LEN {
                return Err(ValidationError::new("tag_too_long"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_valid_tags() {
        assert!(valid_tags(&[]).is_ok());
        assert!(valid_tags(&["py".to_string(), "cli".to_string()]).is_ok());
        assert!(valid_tags(&[" ".to_string()]).is_err());
        assert!(valid_tags(&["x".repeat(MAX_TAG_LEN + 1)]).is_err());
    }
}
