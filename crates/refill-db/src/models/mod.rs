//! Database models - SQLx-compatible structs for PostgreSQL tables

mod bottle;
mod like;
mod problem;
mod review;
mod station;
mod transaction;
mod user;

pub use bottle::BottleModel;
pub use consumer_test::{ConsumerTestAnswerModel, ConsumerTestModel, ConsumerTestQuestionModel};
pub use like::LikeModel;
pub use problem::ProblemModel;
pub use review::ReviewModel;
pub use station::{StationMarkerModel, StationModel};
pub use transaction::{TransactionModel, TransactionTotalsModel};
pub use user::UserModel;
