//! Axum extractors for request handling
//!
//! Wrappers around the stock axum extractors that turn their rejections
//! into `ApiError` bodies, plus typed id path parameters.

mod json;
mod path;
mod query;

pub use json::JsonBody;
pub use path::{IdPairPath, IdPath};
pub use query::QueryParams;
