//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod bottles;
pub mod contribution;
pub mod health;
pub mod likes;
pub mod problems;
pub mod reviews;
pub mod stations;
pub mod transactions;
pub mod users;
