//! Entity validation - field-level invariants checked before anything is persisted
//!
//! Every writable entity has a *draft* type decoded straight from a request body.
//! A draft carries raw strings and numbers; [`EntityValidator::validate`] runs the
//! structural checks declared with `validator` and then the domain checks of
//! [`Candidate::check`], producing the normalized value that may be stored.

mod error;

pub use error::{ValidationError, ValidationResult};

use validator::Validate;

/// A candidate entity that can be turned into its validated, normalized form
pub trait Candidate: Validate {
    /// Normalized value that is safe to persist
    type Valid;

    /// Domain checks (allow-lists, ranges) and normalization
    fn check(self) -> ValidationResult<Self::Valid>;
}

/// Runs the validation pipeline for any [`Candidate`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityValidator;

impl EntityValidator {
    /// Accept and normalize a candidate, or reject it with the offending field
    pub fn validate<C: Candidate>(candidate: C) -> ValidationResult<C::Valid> {
        candidate.validate()?;
        candidate.check()
    }
}

/// Trim an optional string, mapping blank values to `None`
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn default_true() -> bool {
    true
}
