//! Pagination defaults and clamping for catalog listings.

/// Default page size for the parfum listing.
pub const DEFAULT_PARFUM_LIMIT: i64 = 100;

/// Similar parfums drawn from the same brand.
pub const SIMILAR_SAME_BRAND: i64 = 2;

/// Similar parfums drawn from the same category but another brand.
pub const SIMILAR_SAME_CATEGORY: i64 = 2;

/// Hard cap on the combined similar-parfum list.
pub const SIMILAR_TOTAL: i64 = SIMILAR_SAME_BRAND + SIMILAR_SAME_CATEGORY;

/// Resolve a user-provided limit: `default` when absent, at least 1.
///
/// There is no upper bound; a large limit returns every match.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).max(1)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_PARFUM_LIMIT), 100);
    }

    #[test]
    fn clamp_limit_has_no_ceiling() {
        assert_eq!(clamp_limit(Some(10_000), DEFAULT_PARFUM_LIMIT), 10_000);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-5), 100), 1);
        assert_eq!(clamp_limit(Some(0), 100), 1);
    }

    #[test]
    fn clamp_limit_passes_through_valid_value() {
        assert_eq!(clamp_limit(Some(6), 100), 6);
    }

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_floors_negative() {
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
    }

    #[test]
    fn similar_total_is_four() {
        assert_eq!(SIMILAR_TOTAL, 4);
    }
}
