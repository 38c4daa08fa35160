//! Like - a user's endorsement of a station, unique per (station, user)

use serde::Deserialize;
use validator::Validate;

use crate::validation::{Candidate, ValidationResult};
use crate::value_objects::Id;

/// Like of a station by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Like {
    pub id: Id,
    pub station_id: Id,
    pub user_id: Id,
}

/// Validated like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewLike {
    pub station_id: Id,
    pub user_id: Id,
}

impl NewLike {
    pub fn with_id(self, id: Id) -> Like {
        Like {
            id,
            station_id: self.station_id,
            user_id: self.user_id,
        }
    }
}

/// Like as submitted by a client
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct LikeDraft {
    pub station_id: Id,
    pub user_id: Id,
}

impl Candidate for LikeDraft {
    type Valid = NewLike;

    fn check(self) -> ValidationResult<NewLike> {
        Ok(NewLike {
            station_id: self.station_id,
            user_id: self.user_id,
        })
    }
}
