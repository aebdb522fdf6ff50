//! Fixed in-memory catalogs and the filtering shared by their views.
//!
//! Every listing view narrows its dataset the same way: a free-text
//! query matched case-insensitively against one or more fields, ANDed
//! with one or more categorical facets where an "all" sentinel selects
//! everything. Filters are pure and order-preserving.

pub mod equipment;
pub mod learning;
pub mod market;
pub mod schemes;

/// True when `query` is empty or appears, case-insensitively, in any of
/// the given fields.
pub fn text_matches(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Facet sentinel test: empty, `all`, or an `All ...` label selects
/// everything (`All Types`, `All India`, `All Crops`).
pub fn selects_all(facet: &str) -> bool {
    let facet = facet.to_lowercase();
    facet.is_empty() || facet == "all" || facet.starts_with("all ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(text_matches("", &["anything"]));
        assert!(text_matches("", &[]));
    }

    #[test]
    fn query_is_case_insensitive_containment() {
        assert!(text_matches("TOMato", &["Fresh Tomatoes"]));
        assert!(text_matches("kumar", &["Fresh Tomatoes", "Rajesh Kumar"]));
        assert!(!text_matches("onion", &["Fresh Tomatoes", "Rajesh Kumar"]));
    }

    #[test]
    fn all_sentinels() {
        assert!(selects_all(""));
        assert!(selects_all("all"));
        assert!(selects_all("All"));
        assert!(selects_all("All Types"));
        assert!(selects_all("All India"));
        assert!(selects_all("All Crops"));
        assert!(!selects_all("vegetables"));
        assert!(!selects_all("allergy"));
    }
}
