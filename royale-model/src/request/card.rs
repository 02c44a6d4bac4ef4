//! Card endpoint request models.

use serde::{Deserialize, Serialize};

use crate::InvalidArgument;

/// List cards endpoint.
///
/// Fields are declared in the order they appear in the query string.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ListCardsQuery {
    /// How many results should be returned.
    ///
    /// Signed so that the API, not the client, decides what is out of range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Return only items that occur after this marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Return only items that occur before this marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ListCardsQuery {
    /// Checks that at most one paging cursor is set.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if self.after.is_some() && self.before.is_some() {
            Err(InvalidArgument::new(
                "Only one of 'after' or 'before' can be specified, not both.",
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_cursors_are_rejected() {
        let query = ListCardsQuery {
            limit: None,
            after: Some("a".into()),
            before: Some("b".into()),
        };

        let err = query.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only one of 'after' or 'before' can be specified, not both."
        );
    }

    #[test]
    fn empty_cursors_still_count_as_present() {
        let query = ListCardsQuery {
            limit: Some(10),
            after: Some(String::new()),
            before: Some(String::new()),
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn single_cursor_is_accepted() {
        let after = ListCardsQuery {
            after: Some("a".into()),
            ..Default::default()
        };
        let before = ListCardsQuery {
            limit: Some(3),
            before: Some("b".into()),
            ..Default::default()
        };

        assert!(after.validate().is_ok());
        assert!(before.validate().is_ok());
        assert!(ListCardsQuery::default().validate().is_ok());
    }
}
