#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {slug}")]
    NotFound { entity: &'static str, slug: String },
}

impl CoreError {
    /// Shorthand for a slug lookup that matched no row.
    pub fn not_found(entity: &'static str, slug: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            slug: slug.into(),
        }
    }
}
