//! Parfum models, the flat join rows they are built from, and listing filters.

use parfum_core::notes::{partition_notes, NotesByType};
use parfum_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::models::note::ParfumNote;

// ---------------------------------------------------------------------------
// Flat rows (database shape)
// ---------------------------------------------------------------------------

/// One row of `parfums LEFT JOIN brands LEFT JOIN categories`.
///
/// Brand and category columns are all `NULL` when the foreign key is unset.
#[derive(Debug, Clone, FromRow)]
pub struct ParfumRow {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image_url: Option<String>,
    pub launch_year: Option<i32>,
    pub audience: Option<String>,
    pub purchase_link: Option<String>,
    pub brand_id: Option<DbId>,
    pub brand_name: Option<String>,
    pub brand_slug: Option<String>,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

/// Lightweight joined row used by the similar-parfum sampler.
#[derive(Debug, Clone, FromRow)]
pub struct ParfumSummaryRow {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub launch_year: Option<i32>,
    pub brand_name: Option<String>,
    pub brand_slug: Option<String>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

// ---------------------------------------------------------------------------
// Nested shapes (API shape)
// ---------------------------------------------------------------------------

/// Reference to the parfum's brand or category: `{id, name, slug}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// Reference without the key, used in summaries: `{name, slug}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub name: String,
    pub slug: String,
}

/// A parfum with its brand and category embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parfum {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image_url: Option<String>,
    pub launch_year: Option<i32>,
    pub audience: Option<String>,
    pub purchase_link: Option<String>,
    pub brand: Option<EntityRef>,
    pub category: Option<EntityRef>,
}

/// Card-sized parfum used for "similar parfums" suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParfumSummary {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub launch_year: Option<i32>,
    pub brand: Option<NamedRef>,
    pub category: Option<NamedRef>,
}

/// Parfum detail: the parfum, its tagged notes, and related suggestions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParfumDetail {
    #[serde(flatten)]
    pub parfum: Parfum,
    pub notes: Vec<ParfumNote>,
    pub similar_parfums: Vec<ParfumSummary>,
}

impl ParfumDetail {
    /// Group the flat note list into top/middle/base.
    pub fn notes_by_type(&self) -> NotesByType<&ParfumNote> {
        partition_notes(&self.notes, |n| n.kind())
    }
}

fn entity_ref(id: Option<DbId>, name: Option<String>, slug: Option<String>) -> Option<EntityRef> {
    match (id, name, slug) {
        (Some(id), Some(name), Some(slug)) => Some(EntityRef { id, name, slug }),
        _ => None,
    }
}

fn named_ref(name: Option<String>, slug: Option<String>) -> Option<NamedRef> {
    match (name, slug) {
        (Some(name), Some(slug)) => Some(NamedRef { name, slug }),
        _ => None,
    }
}

impl From<ParfumRow> for Parfum {
    fn from(row: ParfumRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            image_url: row.image_url,
            launch_year: row.launch_year,
            audience: row.audience,
            purchase_link: row.purchase_link,
            brand: entity_ref(row.brand_id, row.brand_name, row.brand_slug),
            category: entity_ref(row.category_id, row.category_name, row.category_slug),
        }
    }
}

impl From<ParfumSummaryRow> for ParfumSummary {
    fn from(row: ParfumSummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            image_url: row.image_url,
            launch_year: row.launch_year,
            brand: named_ref(row.brand_name, row.brand_slug),
            category: named_ref(row.category_name, row.category_slug),
        }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for the parfum listing (`GET /api/parfums`).
///
/// Every filter is optional; `limit`/`skip` are clamped in the repository.
/// An empty `limit=` or `skip=` is read as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParfumListQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub skip: Option<i64>,
    pub search: Option<String>,
    pub brand_slug: Option<String>,
    pub category_slug: Option<String>,
    pub audience: Option<String>,
}

/// Parse an optional integer query value, treating a blank value as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid integer '{value}': {e}"))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ParfumRow {
        ParfumRow {
            id: 1,
            name: "Sauvage".into(),
            slug: "sauvage".into(),
            description: "Fresh".into(),
            image_url: Some("/sauvage.png".into()),
            launch_year: Some(2015),
            audience: Some("Pria".into()),
            purchase_link: None,
            brand_id: Some(10),
            brand_name: Some("Dior".into()),
            brand_slug: Some("dior".into()),
            category_id: Some(20),
            category_name: Some("Fresh".into()),
            category_slug: Some("fresh".into()),
        }
    }

    #[test]
    fn row_nests_brand_and_category() {
        let parfum = Parfum::from(row());

        assert_eq!(
            parfum.brand,
            Some(EntityRef {
                id: 10,
                name: "Dior".into(),
                slug: "dior".into(),
            })
        );
        assert_eq!(parfum.category.as_ref().map(|c| c.id), Some(20));
    }

    #[test]
    fn missing_join_yields_null_reference() {
        let mut r = row();
        r.brand_id = None;
        r.brand_name = None;
        r.brand_slug = None;

        let parfum = Parfum::from(r);

        assert!(parfum.brand.is_none());
        assert!(parfum.category.is_some());
    }

    #[test]
    fn parfum_serializes_camel_case_with_nested_refs() {
        let json = serde_json::to_value(Parfum::from(row())).unwrap();

        assert_eq!(json["launchYear"], 2015);
        assert_eq!(json["imageUrl"], "/sauvage.png");
        assert_eq!(json["brand"]["slug"], "dior");
        assert_eq!(json["category"]["name"], "Fresh");
        assert!(json.get("brandId").is_none());
    }

    #[test]
    fn detail_flattens_parfum_fields() {
        let detail = ParfumDetail {
            parfum: Parfum::from(row()),
            notes: vec![ParfumNote {
                id: 1,
                name: "Bergamot".into(),
                note_type: "TOP".into(),
            }],
            similar_parfums: vec![],
        };

        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["slug"], "sauvage");
        assert_eq!(json["notes"][0]["type"], "TOP");
        assert!(json["similarParfums"].as_array().unwrap().is_empty());
    }

    #[test]
    fn detail_groups_notes_by_type() {
        let note = |id, name: &str, t: &str| ParfumNote {
            id,
            name: name.into(),
            note_type: t.into(),
        };
        let detail = ParfumDetail {
            parfum: Parfum::from(row()),
            notes: vec![
                note(1, "Bergamot", "TOP"),
                note(2, "Ambroxan", "MIDDLE"),
                note(3, "Cedar", "BASE"),
            ],
            similar_parfums: vec![],
        };

        let grouped = detail.notes_by_type();

        assert_eq!(grouped.top[0].name, "Bergamot");
        assert_eq!(grouped.middle[0].name, "Ambroxan");
        assert_eq!(grouped.base[0].name, "Cedar");
    }

    #[test]
    fn summary_drops_keys_from_refs() {
        let summary = ParfumSummary::from(ParfumSummaryRow {
            id: 2,
            name: "Miss Dior".into(),
            slug: "miss-dior".into(),
            image_url: None,
            launch_year: Some(2012),
            brand_name: Some("Dior".into()),
            brand_slug: Some("dior".into()),
            category_name: None,
            category_slug: None,
        });

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["brand"], serde_json::json!({"name": "Dior", "slug": "dior"}));
        assert!(json["category"].is_null());
    }

    #[test]
    fn list_query_reads_camel_case_keys() {
        let q: ParfumListQuery = serde_json::from_value(serde_json::json!({
            "brandSlug": "dior",
            "categorySlug": "fresh",
            "skip": "10"
        }))
        .unwrap();

        assert_eq!(q.brand_slug.as_deref(), Some("dior"));
        assert_eq!(q.category_slug.as_deref(), Some("fresh"));
        assert_eq!(q.skip, Some(10));
        assert!(q.limit.is_none());
    }

    #[test]
    fn list_query_reads_blank_numbers_as_absent() {
        let q: ParfumListQuery = serde_json::from_value(serde_json::json!({
            "limit": "",
            "skip": " "
        }))
        .unwrap();

        assert!(q.limit.is_none());
        assert!(q.skip.is_none());
    }

    #[test]
    fn list_query_rejects_non_numeric_limit() {
        let result = serde_json::from_value::<ParfumListQuery>(serde_json::json!({
            "limit": "ten"
        }));

        assert!(result.is_err());
    }
}
