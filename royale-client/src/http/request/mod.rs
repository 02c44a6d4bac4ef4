//! API queries and requests.

pub mod card;

use serde::Serialize;

use crate::Error;

/// URL-encodes a flat set of parameters, without the leading `?`.
///
/// Absent optional values are left out entirely.
pub fn build_query_string<T>(params: &T) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    serde_urlencoded::to_string(params).map_err(From::from)
}

/// Appends a query string to `path`, if there is one.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use royale_model::request::card::ListCardsQuery;

    #[test]
    fn empty_query_leaves_path_alone() {
        let query = build_query_string(&ListCardsQuery::default()).unwrap();

        assert_eq!(query, "");
        assert_eq!(with_query("cards", &query), "cards");
    }

    #[test]
    fn parameters_keep_canonical_order() {
        let query = build_query_string(&ListCardsQuery {
            limit: Some(5),
            after: Some("X".into()),
            before: None,
        })
        .unwrap();

        assert_eq!(with_query("cards", &query), "cards?limit=5&after=X");
    }

    #[test]
    fn cursors_are_url_encoded() {
        let query = build_query_string(&ListCardsQuery {
            before: Some("a b&c=d".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(query, "before=a+b%26c%3Dd");
    }

    #[test]
    fn plain_pairs_are_accepted() {
        let query = build_query_string(&[("limit", "2")]).unwrap();

        assert_eq!(query, "limit=2");
    }
}
