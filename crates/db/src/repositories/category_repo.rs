//! Repository for the `categories` table.

use sqlx::PgConnection;

use crate::models::category::{Category, CategoryDetail};
use crate::repositories::ParfumRepo;

/// Column list for `categories` SELECT queries.
const COLUMNS: &str = "id, name, slug, description";

/// Read-only queries over categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category, alphabetically.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a category by slug. Duplicate slugs resolve to the lowest id.
    pub async fn find_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE slug = $1 ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn find_detail_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<CategoryDetail>, sqlx::Error> {
        let Some(category) = Self::find_by_slug(conn, slug).await? else {
            return Ok(None);
        };
        let parfums = ParfumRepo::list_by_category(conn, category.id).await?;
        Ok(Some(CategoryDetail { category, parfums }))
    }
}
