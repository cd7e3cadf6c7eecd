//! Aggregate counters for the landing page.

use sqlx::PgConnection;

use crate::models::stats::CatalogTotals;

pub struct StatsRepo;

impl StatsRepo {
    /// Count parfums and brands in one round trip.
    pub async fn totals(conn: &mut PgConnection) -> Result<CatalogTotals, sqlx::Error> {
        sqlx::query_as::<_, CatalogTotals>(
            "SELECT \
                (SELECT COUNT(*) FROM parfums)::BIGINT AS total_parfums, \
                (SELECT COUNT(*) FROM brands)::BIGINT AS total_brands",
        )
        .fetch_one(&mut *conn)
        .await
    }
}
