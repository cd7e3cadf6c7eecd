//! Aggregate catalog counters.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTotals {
    pub total_parfums: i64,
    pub total_brands: i64,
}
