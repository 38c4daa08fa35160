//! Review rating (1-5 stars)

use serde::Serialize;

use crate::validation::{ValidationError, ValidationResult};

/// A single rating dimension, always within [`Rating::MIN`, `Rating::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    /// Validate a raw rating for the named dimension
    pub fn new(field: &'static str, value: i32) -> ValidationResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::OutOfRange {
                field,
                value: i64::from(value),
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
            })
        }
    }

    /// Numeric value
    #[inline]
    pub fn value(self) -> i32 {
        i32::from(self.0)
    }
}
