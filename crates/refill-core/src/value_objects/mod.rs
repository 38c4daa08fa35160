//! Value objects - immutable types that represent domain concepts

mod id;
mod problem_status;
mod rating;
mod station_type;
mod water_type;

pub use id::{Id, IdParseError};
pub use problem_status::ProblemStatus;
pub use rating::Rating;
pub use station_type::StationType;
pub use water_type::{OfferedWaterTypes, WaterType};
