//! Like entity <-> model mapper

use refill_core::entities::Like;
use refill_core::value_objects::Id;

use crate::models::LikeModel;

/// Convert LikeModel to Like entity
impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: Id::new(model.id),
            station_id: Id::new(model.station_id),
            user_id: Id::new(model.user_id),
        }
    }
}
