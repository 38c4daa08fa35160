//! User entity - a registered member of the refill community

use serde::Deserialize;
use validator::{Validate, ValidateEmail};

use crate::validation::{non_blank, Candidate, ValidationError, ValidationResult};
use crate::value_objects::Id;

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl User {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated user, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl NewUser {
    /// Attach a database id
    pub fn with_id(self, id: Id) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// User as submitted by a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserDraft {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub email: Option<String>,
}

impl Candidate for UserDraft {
    type Valid = NewUser;

    fn check(self) -> ValidationResult<NewUser> {
        let email = non_blank(self.email).map(|e| e.to_lowercase());
        if let Some(email) = &email {
            if !email.validate_email() {
                return Err(ValidationError::invalid("email", "invalid email format"));
            }
        }

        Ok(NewUser {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email,
        })
    }
}
