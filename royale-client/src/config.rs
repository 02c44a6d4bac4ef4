//! API connectivity config.

use serde::{Deserialize, Serialize};

/// The default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.clashroyale.com/v1/";

/// API connectivity config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    /// The API endpoint. Request paths are appended to this.
    #[serde(default = "endpoint_default")]
    pub endpoint: String,
    /// The API key, sent as a bearer token.
    #[serde(default)]
    pub key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: endpoint_default(),
            key: None,
        }
    }
}

fn endpoint_default() -> String {
    DEFAULT_ENDPOINT.to_owned()
}
