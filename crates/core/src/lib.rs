//! Domain vocabulary shared by the repository and HTTP layers.
//!
//! This crate has no internal dependencies so it can be used from any
//! other crate in the workspace without pulling in sqlx or axum.

pub mod audience;
pub mod error;
pub mod notes;
pub mod pagination;
pub mod search;
pub mod types;
