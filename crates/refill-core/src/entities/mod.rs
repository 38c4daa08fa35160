//! Domain entities - core business objects
//!
//! Each entity comes in three shapes: the persisted entity, a validated `New*`
//! value that may be inserted, and a `*Draft` decoded from a request.

mod bottle;
mod like;
mod problem;
mod review;
mod station;
mod transaction;
mod user;

pub use bottle::{Bottle, BottleDraft, NewBottle};
pub use consumer_test::{
    ConsumerTest, ConsumerTestAnswer, ConsumerTestAnswerDraft, ConsumerTestDraft,
    ConsumerTestQuestion, ConsumerTestQuestionDraft, NewConsumerTest, NewConsumerTestAnswer,
    NewConsumerTestQuestion,
};
pub use like::{Like, LikeDraft, NewLike};
pub use problem::{NewRefillStationProblem, RefillStationProblem, RefillStationProblemDraft};
pub use review::{NewRefillStationReview, RefillStationReview, RefillStationReviewDraft};
pub use station::{NewRefillStation, RefillStation, RefillStationDraft, StationMarker};
pub use transaction::{NewWaterTransaction, WaterTransaction, WaterTransactionDraft};
pub use user::{NewUser, User, UserDraft};
