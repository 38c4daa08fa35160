//! Validation errors raised before anything is persisted

use thiserror::Error;
use validator::ValidationErrors;

/// Result type for validation steps
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejection of a candidate entity, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is not part of the field's allow-list
    #[error("invalid {field}: '{value}' (allowed: {})", .allowed.join(", "))]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// Integer value outside of an inclusive range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Structural check failed (length, format, ...)
    #[error("invalid {field}: {message}")]
    Invalid { field: String, message: String },
}

impl ValidationError {
    /// Create a "not in allow-list" error
    pub fn not_allowed(
        field: &'static str,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::NotAllowed {
            field,
            value: value.into(),
            allowed,
        }
    }

    /// Create a structural validation error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::NotAllowed { field, .. } | Self::OutOfRange { field, .. } => field,
            Self::Invalid { field, .. } => field,
        }
    }
}

impl From<ValidationErrors> for ValidationError {
    /// Report the first failing field (alphabetical, so the outcome is stable)
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map_or_else(|| err.code.to_string(), ToString::to_string);
                    (field.to_string(), message)
                })
            })
            .collect();
        fields.sort();

        match fields.into_iter().next() {
            Some((field, message)) => Self::Invalid { field, message },
            None => Self::invalid("request", "validation failed"),
        }
    }
}
