//! Water transaction entity <-> model mapper

use refill_core::entities::{NewWaterTransaction, WaterTransaction};
use refill_core::stats::TransactionTotals;
use refill_core::value_objects::{Id, WaterType};
use refill_core::DomainError;

use crate::models::{TransactionModel, TransactionTotalsModel};

use super::corrupt_row;

/// Convert TransactionModel to WaterTransaction entity
impl TryFrom<TransactionModel> for WaterTransaction {
    type Error = DomainError;

    fn try_from(model: TransactionModel) -> Result<Self, Self::Error> {
        let water_type = WaterType::parse("water_type", &model.water_type)
            .map_err(|e| corrupt_row("water_transactions", model.id, e))?;

        Ok(WaterTransaction {
            id: Id::new(model.id),
            station_id: Id::new(model.station_id),
            bottle_id: model.bottle_id.map(Id::new),
            user_id: model.user_id.map(Id::new),
            volume: model.volume,
            water_type,
            guest: model.guest,
            timestamp: model.recorded_at,
        })
    }
}

impl From<TransactionTotalsModel> for TransactionTotals {
    fn from(model: TransactionTotalsModel) -> Self {
        TransactionTotals {
            count: model.count,
            volume_ml: model.volume_ml,
        }
    }
}

/// Transaction column values for insert and update
pub struct TransactionInsert {
    pub station_id: i64,
    pub bottle_id: Option<i64>,
    pub user_id: Option<i64>,
    pub volume: i32,
    pub water_type: &'static str,
    pub guest: bool,
}

impl From<&NewWaterTransaction> for TransactionInsert {
    fn from(tx: &NewWaterTransaction) -> Self {
        Self {
            station_id: tx.station_id.into_inner(),
            bottle_id: tx.bottle_id.map(Id::into_inner),
            user_id: tx.user_id.map(Id::into_inner),
            volume: tx.volume,
            water_type: tx.water_type.as_str(),
            guest: tx.guest,
        }
    }
}

impl From<&WaterTransaction> for TransactionInsert {
    fn from(tx: &WaterTransaction) -> Self {
        Self {
            station_id: tx.station_id.into_inner(),
            bottle_id: tx.bottle_id.map(Id::into_inner),
            user_id: tx.user_id.map(Id::into_inner),
            volume: tx.volume,
            water_type: tx.water_type.as_str(),
            guest: tx.guest,
        }
    }
}
