//! Brand model.

use parfum_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::parfum::Parfum;

/// A row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// A brand together with every parfum it sells.
#[derive(Debug, Clone, Serialize)]
pub struct BrandDetail {
    pub brand: Brand,
    pub parfums: Vec<Parfum>,
}
