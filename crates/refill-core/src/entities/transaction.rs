//! Water transaction - one dispensing event at a station

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::validation::{Candidate, ValidationResult};
use crate::value_objects::{Id, WaterType};

/// Dispensing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterTransaction {
    pub id: Id,
    pub station_id: Id,
    pub bottle_id: Option<Id>,
    pub user_id: Option<Id>,
    /// Dispensed volume in ml
    pub volume: i32,
    pub water_type: WaterType,
    pub guest: bool,
    pub timestamp: DateTime<Utc>,
}

/// Validated transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaterTransaction {
    pub station_id: Id,
    pub bottle_id: Option<Id>,
    pub user_id: Option<Id>,
    pub volume: i32,
    pub water_type: WaterType,
    pub guest: bool,
}

impl NewWaterTransaction {
    /// Attach a database id and timestamp
    pub fn with_id(self, id: Id, timestamp: DateTime<Utc>) -> WaterTransaction {
        WaterTransaction {
            id,
            station_id: self.station_id,
            bottle_id: self.bottle_id,
            user_id: self.user_id,
            volume: self.volume,
            water_type: self.water_type,
            guest: self.guest,
            timestamp,
        }
    }
}

/// Transaction as submitted by a station or client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WaterTransactionDraft {
    pub station_id: Id,

    #[serde(default)]
    pub bottle_id: Option<Id>,

    #[serde(default)]
    pub user_id: Option<Id>,

    #[validate(range(min = 1, message = "must be a positive volume in ml"))]
    pub volume: i32,

    pub water_type: String,

    #[serde(default)]
    pub guest: bool,
}

impl Candidate for WaterTransactionDraft {
    type Valid = NewWaterTransaction;

    fn check(self) -> ValidationResult<NewWaterTransaction> {
        Ok(NewWaterTransaction {
            station_id: self.station_id,
            bottle_id: self.bottle_id,
            user_id: self.user_id,
            volume: self.volume,
            water_type: WaterType::parse("water_type", &self.water_type)?,
            guest: self.guest,
        })
    }
}
