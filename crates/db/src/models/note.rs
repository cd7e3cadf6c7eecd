//! Scent notes attached to a parfum.

use parfum_core::notes::NoteType;
use parfum_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A note joined through `parfum_notes`, tagged with its pyramid position.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ParfumNote {
    pub id: DbId,
    pub name: String,
    /// Stored tag: `TOP`, `MIDDLE` or `BASE`.
    #[serde(rename = "type")]
    pub note_type: String,
}

impl ParfumNote {
    pub fn kind(&self) -> Option<NoteType> {
        NoteType::parse(&self.note_type)
    }
}
