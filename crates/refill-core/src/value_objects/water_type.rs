//! Water types dispensed by stations and preferred by bottles

use serde::Serialize;
use std::fmt;

use crate::validation::{ValidationError, ValidationResult};

/// Water type of a bottle preference or a dispensing transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterType {
    Tap,
    Mineral,
}

impl WaterType {
    /// Canonical (stored) values
    pub const ALLOWED: &'static [&'static str] = &["tap", "mineral"];

    /// Parse a raw value, case-insensitively
    pub fn parse(field: &'static str, raw: &str) -> ValidationResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "tap" => Ok(Self::Tap),
            "mineral" => Ok(Self::Mineral),
            _ => Err(ValidationError::not_allowed(field, raw, Self::ALLOWED)),
        }
    }

    /// Canonical string form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::Mineral => "mineral",
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Water types a refill station offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferedWaterTypes {
    Mineral,
    Tap,
    Both,
}

impl OfferedWaterTypes {
    /// Canonical (stored) values
    pub const ALLOWED: &'static [&'static str] = &["mineral", "tap", "both"];

    /// Parse a raw value, case-insensitively.
    ///
    /// `MINERALTAP` is the legacy spelling of `both`.
    pub fn parse(field: &'static str, raw: &str) -> ValidationResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "mineral" => Ok(Self::Mineral),
            "tap" => Ok(Self::Tap),
            "both" | "mineraltap" => Ok(Self::Both),
            _ => Err(ValidationError::not_allowed(field, raw, Self::ALLOWED)),
        }
    }

    /// Canonical string form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mineral => "mineral",
            Self::Tap => "tap",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for OfferedWaterTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
