//! Read-side statistics derived from stored reviews and transactions

pub mod contribution;
pub mod rating;

pub use contribution::{
    savings, CommunityContribution, Savings, StationTypeCounts, TransactionTotals,
    UserContribution, MONEY_FACTOR, TRASH_FACTOR,
};
pub use rating::{RatingOutcome, RatingSummary};
