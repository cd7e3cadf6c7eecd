//! Free-text search helpers for `ILIKE` predicates.

/// Trim a text filter and treat blank input as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Escape `LIKE`/`ILIKE` metacharacters so the term matches literally.
///
/// Uses backslash, which is PostgreSQL's default `LIKE` escape character.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a case-insensitive substring pattern (`%term%`) for `ILIKE`.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
