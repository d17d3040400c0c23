// src/models/query.rs
// DOCUMENTATION: Request parameters for the listing endpoint
// PURPOSE: Parse loosely typed query strings into a bounded listing query

use serde::Deserialize;

/// Hard cap on the page size
pub const MAX_LIMIT: usize = 200;

/// Raw query-string parameters
/// DOCUMENTATION: Kept as strings so that malformed numbers fall back to
/// defaults instead of rejecting the request
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LodgingsParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub skip: Option<String>,
    pub id: Option<String>,
}

/// Validated listing query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingQuery {
    /// Exact id-or-slug lookup; every other parameter is ignored
    ById(String),

    /// Category and search filtering followed by pagination
    Filtered {
        /// Lowercased category key
        category: Option<String>,
        /// Lowercased search term
        search: Option<String>,
        limit: usize,
        skip: usize,
    },
}

impl ListingQuery {
    /// Build a query from request parameters
    /// DOCUMENTATION: `limit` is clamped to MAX_LIMIT; non-numeric or
    /// negative values use `default_limit`. `skip` defaults to 0.
    pub fn from_params(params: &LodgingsParams, default_limit: usize) -> Self {
        // Blankness is checked on the trimmed value; the lookup is exact
        if let Some(id) = params.id.as_deref().filter(|id| !id.trim().is_empty()) {
            return ListingQuery::ById(id.to_string());
        }

        let default_limit = default_limit.min(MAX_LIMIT);
        let limit = parse_non_negative(params.limit.as_deref())
            .map(|l| l.min(MAX_LIMIT))
            .unwrap_or(default_limit);
        let skip = parse_non_negative(params.skip.as_deref()).unwrap_or(0);

        ListingQuery::Filtered {
            category: non_empty(params.category.as_deref()).map(str::to_lowercase),
            search: non_empty(params.search.as_deref()).map(str::to_lowercase),
            limit,
            skip,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_non_negative(value: Option<&str>) -> Option<usize> {
    let n: i64 = value?.trim().parse().ok()?;
    usize::try_from(n).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> LodgingsParams {
        let mut p = LodgingsParams::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "category" => p.category = v,
                "search" => p.search = v,
                "limit" => p.limit = v,
                "skip" => p.skip = v,
                "id" => p.id = v,
                _ => unreachable!(),
            }
        }
        p
    }

    #[test]
    fn test_id_short_circuits() {
        let q = ListingQuery::from_params(
            &params(&[("id", "abc123"), ("category", "surf"), ("limit", "1")]),
            50,
        );
        assert_eq!(q, ListingQuery::ById("abc123".to_string()));
    }

    #[test]
    fn test_id_kept_verbatim() {
        let q = ListingQuery::from_params(&params(&[("id", " abc123")]), 50);
        assert_eq!(q, ListingQuery::ById(" abc123".to_string()));

        let q = ListingQuery::from_params(&params(&[("id", "   ")]), 50);
        assert!(matches!(q, ListingQuery::Filtered { .. }));
    }

    #[test]
    fn test_limit_clamped_and_defaulted() {
        let q = ListingQuery::from_params(&params(&[("limit", "5000")]), 50);
        assert!(matches!(q, ListingQuery::Filtered { limit: 200, skip: 0, .. }));

        let q = ListingQuery::from_params(&params(&[("limit", "abc"), ("skip", "-4")]), 50);
        assert!(matches!(q, ListingQuery::Filtered { limit: 50, skip: 0, .. }));

        let q = ListingQuery::from_params(&params(&[("limit", "-1")]), 50);
        assert!(matches!(q, ListingQuery::Filtered { limit: 50, .. }));
    }

    #[test]
    fn test_filters_lowercased_and_blank_ignored() {
        let q = ListingQuery::from_params(
            &params(&[("category", " SURF "), ("search", "   "), ("id", "")]),
            50,
        );
        assert_eq!(
            q,
            ListingQuery::Filtered {
                category: Some("surf".to_string()),
                search: None,
                limit: 50,
                skip: 0,
            }
        );
    }
}
