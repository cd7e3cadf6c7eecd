//! Repository for the `brands` table.

use sqlx::PgConnection;

use crate::models::brand::{Brand, BrandDetail};
use crate::repositories::ParfumRepo;

/// Column list for `brands` SELECT queries.
const COLUMNS: &str = "id, name, slug, description, image_url";

/// Read-only queries over brands.
pub struct BrandRepo;

impl BrandRepo {
    /// List every brand, alphabetically.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Brand>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a brand by slug. Duplicate slugs resolve to the lowest id.
    pub async fn find_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE slug = $1 ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Find a brand by slug together with its parfums (newest first).
    pub async fn find_detail_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<BrandDetail>, sqlx::Error> {
        let Some(brand) = Self::find_by_slug(conn, slug).await? else {
            return Ok(None);
        };
        let parfums = ParfumRepo::list_by_brand(conn, brand.id).await?;
        Ok(Some(BrandDetail { brand, parfums }))
    }
}
