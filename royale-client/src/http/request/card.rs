//! Card-related queries and requests.

use futures_util::future::BoxFuture;

use royale_model::{card::Card, request::card::ListCardsQuery, response::ItemList};

use serde_json::Value;

use crate::Error;
use crate::http::Client;
use crate::http::request::{build_query_string, with_query};

/// The cards endpoint.
pub const CARDS_PATH: &str = "cards";

/// Lists available cards.
///
/// Resolves to the API's response body exactly as it was sent.
#[derive(Debug)]
pub struct ListCards {
    client: Client,
    query: ListCardsQuery,
}

impl ListCards {
    /// Creates a new `ListCards`.
    pub fn new(client: Client) -> ListCards {
        ListCards {
            client,
            query: ListCardsQuery::default(),
        }
    }

    /// Replaces every parameter at once.
    pub fn query(self, query: ListCardsQuery) -> ListCards {
        ListCards { query, ..self }
    }

    /// Limits how many cards are returned.
    pub fn limit(mut self, limit: i64) -> ListCards {
        self.query.limit = Some(limit);
        self
    }

    /// Returns only cards after this marker.
    pub fn after(mut self, after: impl Into<String>) -> ListCards {
        self.query.after = Some(after.into());
        self
    }

    /// Returns only cards before this marker.
    pub fn before(mut self, before: impl Into<String>) -> ListCards {
        self.query.before = Some(before.into());
        self
    }

    /// Validates the parameters and builds the request path.
    pub fn path(&self) -> Result<String, Error> {
        self.query.validate()?;

        let query = build_query_string(&self.query)?;
        Ok(with_query(CARDS_PATH, &query))
    }

    /// Sends the request and decodes the page into typed cards.
    pub async fn items(self) -> Result<ItemList<Card>, Error> {
        let body = self.await?;
        serde_json::from_value(body).map_err(From::from)
    }
}

impl IntoFuture for ListCards {
    type Output = Result<Value, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let path = self.path()?;

            self.client.make_api_request(&path).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::ApiConfig;

    fn client() -> Client {
        Client::new(&ApiConfig {
            key: Some("test-key".into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn no_parameters() {
        assert_eq!(client().list_cards().path().unwrap(), "cards");
    }

    #[test]
    fn limit_only() {
        assert_eq!(client().list_cards().limit(5).path().unwrap(), "cards?limit=5");
    }

    #[test]
    fn after_only() {
        assert_eq!(
            client().list_cards().after("X").path().unwrap(),
            "cards?after=X"
        );
    }

    #[test]
    fn limit_and_before() {
        assert_eq!(
            client().list_cards().before("Y").limit(0).path().unwrap(),
            "cards?limit=0&before=Y"
        );
    }

    #[test]
    fn negative_limit_is_forwarded() {
        assert_eq!(
            client().list_cards().limit(-1).path().unwrap(),
            "cards?limit=-1"
        );
    }

    #[test]
    fn both_cursors_fail() {
        let err = client()
            .list_cards()
            .after("X")
            .before("Y")
            .path()
            .unwrap_err();

        assert!(err.is_invalid_argument());
    }
}
