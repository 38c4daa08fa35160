//! Status of a reported station problem

use serde::Serialize;
use std::fmt;

use crate::validation::{ValidationError, ValidationResult};

/// Problem status. Any status may follow any other; no transitions are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    Active,
    InProcess,
    Inactive,
}

impl ProblemStatus {
    /// Canonical (stored) values
    pub const ALLOWED: &'static [&'static str] = &["active", "in_process", "inactive"];

    /// Parse a raw value. Case-insensitive; spaces and hyphens count as underscores,
    /// so `In Process` becomes `in_process`.
    pub fn parse(field: &'static str, raw: &str) -> ValidationResult<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "in_process" => Ok(Self::InProcess),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ValidationError::not_allowed(field, raw, Self::ALLOWED)),
        }
    }

    /// Canonical string form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InProcess => "in_process",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
