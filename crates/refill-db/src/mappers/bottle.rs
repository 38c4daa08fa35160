//! Bottle entity <-> model mapper

use refill_core::entities::{Bottle, NewBottle};
use refill_core::value_objects::{Id, WaterType};
use refill_core::DomainError;

use crate::models::BottleModel;

use super::corrupt_row;

/// Convert BottleModel to Bottle entity
impl TryFrom<BottleModel> for Bottle {
    type Error = DomainError;

    fn try_from(model: BottleModel) -> Result<Self, Self::Error> {
        let water_type = WaterType::parse("water_type", &model.water_type)
            .map_err(|e| corrupt_row("bottles", model.id, e))?;

        Ok(Bottle {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            nfc_id: model.nfc_id,
            fill_volume: model.fill_volume,
            water_type,
            title: model.title,
            bottle_image: model.bottle_image,
            active: model.active,
        })
    }
}

/// Bottle column values for insert and update
pub struct BottleInsert<'a> {
    pub user_id: i64,
    pub nfc_id: &'a str,
    pub fill_volume: i32,
    pub water_type: &'static str,
    pub title: &'a str,
    pub bottle_image: Option<&'a str>,
    pub active: bool,
}

impl<'a> From<&'a NewBottle> for BottleInsert<'a> {
    fn from(bottle: &'a NewBottle) -> Self {
        Self {
            user_id: bottle.user_id.into_inner(),
            nfc_id: &bottle.nfc_id,
            fill_volume: bottle.fill_volume,
            water_type: bottle.water_type.as_str(),
            title: &bottle.title,
            bottle_image: bottle.bottle_image.as_deref(),
            active: bottle.active,
        }
    }
}

impl<'a> From<&'a Bottle> for BottleInsert<'a> {
    fn from(bottle: &'a Bottle) -> Self {
        Self {
            user_id: bottle.user_id.into_inner(),
            nfc_id: &bottle.nfc_id,
            fill_volume: bottle.fill_volume,
            water_type: bottle.water_type.as_str(),
            title: &bottle.title,
            bottle_image: bottle.bottle_image.as_deref(),
            active: bottle.active,
        }
    }
}
