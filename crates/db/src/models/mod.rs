//! Domain model structs and query DTOs.
//!
//! Each submodule contains:
//! - `FromRow` structs matching the flat rows the repositories select
//! - `Serialize` structs in the nested shape the API returns
//! - `Deserialize` query-parameter structs where the entity is filterable

pub mod brand;
pub mod category;
pub mod note;
pub mod parfum;
pub mod stats;
