//! Category model.

use parfum_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::parfum::Parfum;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// A category together with every parfum filed under it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub parfums: Vec<Parfum>,
}
