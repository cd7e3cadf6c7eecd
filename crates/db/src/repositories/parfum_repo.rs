//! Repository for the `parfums` table and its brand/category joins.

use parfum_core::audience::Audience;
use parfum_core::pagination::{
    clamp_limit, clamp_offset, DEFAULT_PARFUM_LIMIT, SIMILAR_SAME_BRAND, SIMILAR_SAME_CATEGORY,
    SIMILAR_TOTAL,
};
use parfum_core::search::{contains_pattern, non_blank};
use parfum_core::types::DbId;
use sqlx::PgConnection;

use crate::models::parfum::{
    Parfum, ParfumDetail, ParfumListQuery, ParfumRow, ParfumSummary, ParfumSummaryRow,
};
use crate::repositories::NoteRepo;

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for joined parfum SELECTs (aliases match [`ParfumRow`]).
const COLUMNS: &str = "\
    p.id, p.name, p.slug, p.description, p.image_url, p.launch_year, \
    p.audience, p.purchase_link, \
    b.id AS brand_id, b.name AS brand_name, b.slug AS brand_slug, \
    c.id AS category_id, c.name AS category_name, c.slug AS category_slug";

/// Column list for similar-parfum SELECTs (aliases match [`ParfumSummaryRow`]).
const SUMMARY_COLUMNS: &str = "\
    p.id, p.name, p.slug, p.image_url, p.launch_year, \
    b.name AS brand_name, b.slug AS brand_slug, \
    c.name AS category_name, c.slug AS category_slug";

/// FROM clause shared by every parfum query.
const JOINS: &str = "\
    FROM parfums p \
    LEFT JOIN brands b ON b.id = p.brand_id \
    LEFT JOIN categories c ON c.id = p.category_id";

/// Ordering for brand and category detail pages: newest first.
const NEWEST_FIRST: &str = "ORDER BY p.launch_year DESC NULLS LAST, p.name ASC, p.id ASC";

// ---------------------------------------------------------------------------
// ParfumRepo
// ---------------------------------------------------------------------------

/// Read-only queries over parfums.
pub struct ParfumRepo;

impl ParfumRepo {
    /// One page of parfums matching the listing filters, ordered by name.
    pub async fn list(
        conn: &mut PgConnection,
        params: &ParfumListQuery,
    ) -> Result<Vec<Parfum>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PARFUM_LIMIT);
        let offset = clamp_offset(params.skip);

        let filter = build_parfum_filter(params);
        let query = filter.page_query();

        let mut q = sqlx::query_as::<_, ParfumRow>(&query);
        for value in &filter.bind_values {
            q = q.bind(value.as_str());
        }
        let rows = q.bind(limit).bind(offset).fetch_all(&mut *conn).await?;

        Ok(rows.into_iter().map(Parfum::from).collect())
    }

    /// Count parfums matching the listing filters, ignoring pagination.
    pub async fn count(
        conn: &mut PgConnection,
        params: &ParfumListQuery,
    ) -> Result<i64, sqlx::Error> {
        let filter = build_parfum_filter(params);
        let query = filter.count_query();

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for value in &filter.bind_values {
            q = q.bind(value.as_str());
        }
        q.fetch_one(&mut *conn).await
    }

    /// Find a parfum by slug. Duplicate slugs resolve to the lowest id.
    pub async fn find_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<Parfum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE p.slug = $1 ORDER BY p.id ASC LIMIT 1");
        let row = sqlx::query_as::<_, ParfumRow>(&query)
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Parfum::from))
    }

    /// Find a parfum by slug, enriched with its notes and similar parfums.
    pub async fn find_detail_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<ParfumDetail>, sqlx::Error> {
        let Some(parfum) = Self::find_by_slug(conn, slug).await? else {
            return Ok(None);
        };

        let notes = NoteRepo::list_for_parfum(conn, parfum.id).await?;
        let similar_parfums = Self::find_similar(
            conn,
            parfum.id,
            parfum.brand.as_ref().map(|b| b.id),
            parfum.category.as_ref().map(|c| c.id),
        )
        .await?;

        Ok(Some(ParfumDetail {
            parfum,
            notes,
            similar_parfums,
        }))
    }

    /// All parfums of one brand, newest first.
    pub async fn list_by_brand(
        conn: &mut PgConnection,
        brand_id: DbId,
    ) -> Result<Vec<Parfum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE p.brand_id = $1 {NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, ParfumRow>(&query)
            .bind(brand_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Parfum::from).collect())
    }

    /// All parfums in one category, newest first.
    pub async fn list_by_category(
        conn: &mut PgConnection,
        category_id: DbId,
    ) -> Result<Vec<Parfum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE p.category_id = $1 {NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, ParfumRow>(&query)
            .bind(category_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Parfum::from).collect())
    }

    /// Sample up to four parfums related to the given one.
    ///
    /// Up to two come from the same brand and up to two from the same
    /// category under a different brand; the source parfum is always
    /// excluded. Each half is randomly ordered, so consecutive calls may
    /// return different suggestions. A missing brand or category leaves the
    /// corresponding half empty.
    pub async fn find_similar(
        conn: &mut PgConnection,
        parfum_id: DbId,
        brand_id: Option<DbId>,
        category_id: Option<DbId>,
    ) -> Result<Vec<ParfumSummary>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ParfumSummaryRow>(&similar_query())
            .bind(parfum_id)
            .bind(brand_id)
            .bind(category_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(ParfumSummary::from).collect())
    }
}

// ---------------------------------------------------------------------------
// Query builders
// ---------------------------------------------------------------------------

/// WHERE clause and bind values derived from [`ParfumListQuery`].
///
/// Placeholders are numbered from `$1`; `next_idx` is the first unused one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParfumFilter {
    pub where_clause: String,
    pub bind_values: Vec<String>,
    pub next_idx: u32,
}

impl ParfumFilter {
    /// Page statement: filter, name ordering, then `LIMIT`/`OFFSET` placeholders.
    ///
    /// The caller binds the filter values first, then limit and offset.
    pub fn page_query(&self) -> String {
        let limit_idx = self.next_idx;
        let offset_idx = self.next_idx + 1;
        format!(
            "SELECT {COLUMNS} {JOINS} {} \
             ORDER BY p.name ASC, p.id ASC \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            self.where_clause
        )
    }

    /// Count statement over the same joins and filter.
    pub fn count_query(&self) -> String {
        format!("SELECT COUNT(*)::BIGINT AS count {JOINS} {}", self.where_clause)
    }
}

/// Build the WHERE clause for the parfum listing.
///
/// Every supplied filter adds one AND-ed predicate. The search term is
/// matched case-insensitively against parfum name, description and brand
/// name within its own OR group. Blank text filters and unrecognized
/// audience tokens add nothing. Values only ever appear as placeholders.
pub fn build_parfum_filter(params: &ParfumListQuery) -> ParfumFilter {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<String> = Vec::new();

    if let Some(search) = non_blank(params.search.as_deref()) {
        conditions.push(format!(
            "(p.name ILIKE ${bind_idx} OR p.description ILIKE ${bind_idx} OR b.name ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(contains_pattern(search));
    }

    if let Some(brand_slug) = non_blank(params.brand_slug.as_deref()) {
        conditions.push(format!("b.slug = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(brand_slug.to_string());
    }

    if let Some(category_slug) = non_blank(params.category_slug.as_deref()) {
        conditions.push(format!("c.slug = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(category_slug.to_string());
    }

    if let Some(audience) = params.audience.as_deref().and_then(Audience::parse) {
        conditions.push(format!("p.audience = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(audience.as_str().to_string());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    ParfumFilter {
        where_clause,
        bind_values,
        next_idx: bind_idx,
    }
}

/// Two random-ordered halves combined with `UNION`.
///
/// Binds: `$1` source parfum id, `$2` brand id, `$3` category id.
fn similar_query() -> String {
    format!(
        "(SELECT {SUMMARY_COLUMNS} {JOINS} \
            WHERE p.brand_id = $2 AND p.id <> $1 \
            ORDER BY random() LIMIT {SIMILAR_SAME_BRAND}) \
         UNION \
         (SELECT {SUMMARY_COLUMNS} {JOINS} \
            WHERE p.category_id = $3 AND p.brand_id IS DISTINCT FROM $2 AND p.id <> $1 \
            ORDER BY random() LIMIT {SIMILAR_SAME_CATEGORY}) \
         LIMIT {SIMILAR_TOTAL}"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
