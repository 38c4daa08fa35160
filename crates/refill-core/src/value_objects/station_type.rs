//! Refill station type

use serde::Serialize;
use std::fmt;

use crate::validation::{ValidationError, ValidationResult};

/// How a station dispenses water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    Manual,
    Smart,
}

impl StationType {
    /// Canonical (stored) values
    pub const ALLOWED: &'static [&'static str] = &["manual", "smart"];

    /// Parse a raw value, case-insensitively (`MANUAL`, `Manual`, `manual`)
    pub fn parse(field: &'static str, raw: &str) -> ValidationResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "smart" => Ok(Self::Smart),
            _ => Err(ValidationError::not_allowed(field, raw, Self::ALLOWED)),
        }
    }

    /// Canonical string form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Smart => "smart",
        }
    }
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
