//! Bottle entity - a reusable container owned by a user

use serde::Deserialize;
use validator::Validate;

use crate::validation::{default_true, non_blank, Candidate, ValidationResult};
use crate::value_objects::{Id, WaterType};

/// Reusable bottle, optionally tagged with an NFC chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bottle {
    pub id: Id,
    pub user_id: Id,
    /// NFC tag id; empty when the bottle has no tag
    pub nfc_id: String,
    /// Fill volume in ml
    pub fill_volume: i32,
    pub water_type: WaterType,
    pub title: String,
    pub bottle_image: Option<String>,
    pub active: bool,
}

/// Validated bottle, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBottle {
    pub user_id: Id,
    pub nfc_id: String,
    pub fill_volume: i32,
    pub water_type: WaterType,
    pub title: String,
    pub bottle_image: Option<String>,
    pub active: bool,
}

impl NewBottle {
    /// Check if the bottle carries an NFC tag
    #[inline]
    pub fn has_nfc_tag(&self) -> bool {
        !self.nfc_id.is_empty()
    }

    /// Attach a database id
    pub fn with_id(self, id: Id) -> Bottle {
        Bottle {
            id,
            user_id: self.user_id,
            nfc_id: self.nfc_id,
            fill_volume: self.fill_volume,
            water_type: self.water_type,
            title: self.title,
            bottle_image: self.bottle_image,
            active: self.active,
        }
    }
}

/// Bottle as submitted by a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BottleDraft {
    pub user_id: Id,

    #[serde(default)]
    #[validate(length(max = 32, message = "must be at most 32 characters"))]
    pub nfc_id: String,

    #[validate(range(min = 1, message = "must be a positive volume in ml"))]
    pub fill_volume: i32,

    pub water_type: String,

    #[validate(length(max = 16, message = "must be at most 16 characters"))]
    pub title: String,

    #[serde(default)]
    pub bottle_image: Option<String>,

    #[serde(default = "default_true")]
    pub active: bool,
}

impl Candidate for BottleDraft {
    type Valid = NewBottle;

    fn check(self) -> ValidationResult<NewBottle> {
        let water_type = WaterType::parse("water_type", &self.water_type)?;

        Ok(NewBottle {
            user_id: self.user_id,
            nfc_id: self.nfc_id.trim().to_string(),
            fill_volume: self.fill_volume,
            water_type,
            title: self.title,
            bottle_image: non_blank(self.bottle_image),
            active: self.active,
        })
    }
}
