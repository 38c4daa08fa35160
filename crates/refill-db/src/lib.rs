//! # refill-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `refill-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use refill_db::pool::{create_pool, PoolConfig};
//! use refill_db::repositories::PgStationRepository;
//! use refill_core::traits::StationRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     let stations = PgStationRepository::new(pool);
//!     let markers = stations.find_markers().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, ping, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgBottleRepository, PgConsumerTestAnswerRepository, PgConsumerTestQuestionRepository,
    PgConsumerTestRepository, PgLikeRepository, PgProblemRepository, PgReviewRepository,
    PgStationRepository, PgTransactionRepository, PgUserRepository,
};
