//! Repository for `notes` joined through `parfum_notes`.

use parfum_core::types::DbId;
use sqlx::PgConnection;

use crate::models::note::ParfumNote;

pub struct NoteRepo;

impl NoteRepo {
    /// Notes attached to a parfum, in association insertion order.
    pub async fn list_for_parfum(
        conn: &mut PgConnection,
        parfum_id: DbId,
    ) -> Result<Vec<ParfumNote>, sqlx::Error> {
        sqlx::query_as::<_, ParfumNote>(
            "SELECT n.id, n.name, pn.note_type \
             FROM parfum_notes pn \
             JOIN notes n ON n.id = pn.note_id \
             WHERE pn.parfum_id = $1 \
             ORDER BY pn.id ASC",
        )
        .bind(parfum_id)
        .fetch_all(&mut *conn)
        .await
    }
}
