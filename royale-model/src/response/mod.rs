//! API responses.

use serde::{Deserialize, Serialize};

/// A page of items.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ItemList<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Markers for the surrounding pages.
    #[serde(default)]
    pub paging: Paging,
}

/// Paging metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Cursors,
}

/// Paging cursors.
///
/// Pass one of these back as `after` or `before` to walk the list.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Cursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::card::{Card, Rarity};

    #[test]
    fn item_list_with_cursor() {
        let list: ItemList<Card> = serde_json::from_str(
            r#"{
                "items": [{"name":"Knight","id":26000000,"maxLevel":14}],
                "paging": {"cursors": {"after": "eyJwb3MiOjF9"}}
            }"#,
        )
        .unwrap();

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.paging.cursors.after.as_deref(), Some("eyJwb3MiOjF9"));
        assert_eq!(list.paging.cursors.before, None);
    }

    #[test]
    fn item_list_with_unrecognized_rarity() {
        let list: ItemList<Card> = serde_json::from_str(
            r#"{"items": [
                {"name":"Knight","id":26000000,"maxLevel":14,"rarity":"common"},
                {"name":"Goblin Queen","id":26000099,"maxLevel":6,"rarity":"mythic"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].rarity, Some(Rarity::Common));
        assert_eq!(list.items[1].rarity, Some(Rarity::Unknown));
    }

    #[test]
    fn item_list_without_paging() {
        let list: ItemList<Card> = serde_json::from_str(r#"{"items": []}"#).unwrap();

        assert!(list.items.is_empty());
        assert_eq!(list.paging, Paging::default());
    }
}
