//! Royale API client.

use std::sync::Arc;

use http::{HeaderValue, Method, header};

use royale_model::{ApiError, request::card::ListCardsQuery};

use serde_json::Value;

use tracing::instrument;

use crate::Error;
use crate::config::ApiConfig;
use crate::http::request::card::ListCards;

/// A client used to access the HTTP API.
///
/// Cheaply cloneable, as it uses an `Arc` to track internal state and manage
/// connections.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    state: Arc<ClientState>,
}

#[derive(Debug)]
struct ClientState {
    endpoint: String,
    authorization: HeaderValue,
}

impl Client {
    /// Creates a new client.
    pub fn new(config: &ApiConfig) -> Result<Client, Error> {
        let key = config.key.as_deref().ok_or(Error::MissingApiKey)?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", key))?;
        authorization.set_sensitive(true);

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .deflate(true)
            .build()?;

        // request paths are relative, so the endpoint acts as a directory
        let mut endpoint = config.endpoint.to_owned();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }

        let state = ClientState {
            endpoint,
            authorization,
        };

        Ok(Client {
            http,
            state: Arc::new(state),
        })
    }

    /// The endpoint request paths are appended to.
    pub fn endpoint(&self) -> &str {
        &self.state.endpoint
    }

    /// Lists available cards.
    pub fn list_cards(&self) -> ListCards {
        ListCards::new(self.clone())
    }

    /// Lists available cards with an already assembled query.
    ///
    /// Fails without sending anything if both paging cursors are set.
    pub async fn get_cards(&self, query: ListCardsQuery) -> Result<Value, Error> {
        self.list_cards().query(query).await
    }

    /// Makes a `GET` request to the API and returns its JSON body untouched.
    ///
    /// `path` is relative to the configured endpoint and may carry a query
    /// string.
    #[instrument(skip(self))]
    pub async fn make_api_request(&self, path: &str) -> Result<Value, Error> {
        let res = self.request(Method::GET, path).send().await?;
        let body = res.bytes().await?;

        serde_json::from_slice(&body).map_err(From::from)
    }

    /// Makes a generic request to the server.
    pub(crate) fn request(&self, method: Method, url: impl AsRef<str>) -> Request {
        Request::new(self.clone(), method, url)
    }
}

/// A HTTP client request.
#[derive(Debug)]
pub struct Request {
    client: Client,
    request: reqwest::RequestBuilder,
}

impl Request {
    /// Creates a new `Request`.
    ///
    /// The url is appended to the API endpoint, and headers are set before
    /// sending the request.
    pub fn new(client: Client, method: Method, url: impl AsRef<str>) -> Request {
        let url = format!("{}{}", client.state.endpoint, url.as_ref());

        Request {
            request: client.http.request(method, url),
            client,
        }
    }

    /// Makes a general request to the API.
    ///
    /// Any non-success status is turned into [`Error::Api`].
    pub async fn send(self) -> Result<reqwest::Response, Error> {
        let mut request = self.request.build()?;

        request.headers_mut().extend([
            (
                header::AUTHORIZATION,
                self.client.state.authorization.clone(),
            ),
            (header::ACCEPT, HeaderValue::from_static("application/json")),
        ]);

        tracing::debug!(url = %request.url(), "sending request");

        let res = self.client.http.execute(request).await?;
        let status = res.status();

        if status.is_success() {
            return Ok(res);
        }

        // the API usually explains itself, but proxies in front of it may not
        let body = res.bytes().await?;
        let error = serde_json::from_slice::<ApiError>(&body).unwrap_or_else(|_| {
            ApiError::new(status.canonical_reason().unwrap_or("unknown"))
                .with_message(String::from_utf8_lossy(&body))
        });

        tracing::warn!(%status, %error, "request rejected");

        Err(Error::Api { status, error })
    }
}
