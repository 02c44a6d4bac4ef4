//! MCP tools.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use royale_client::{Error, http::Client};
use royale_model::request::card::ListCardsQuery;

use schemars::JsonSchema;

use serde::Deserialize;

use serde_json::Value;

/// Arguments of `get_cards`.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema)]
pub struct GetCardsParams {
    /// Limit the number of items returned in the response.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Return only items that occur after this marker. The marker can be
    /// found in the `paging` property of a previous response. Only one of
    /// `after` or `before` can be specified.
    #[serde(default)]
    pub after: Option<String>,
    /// Return only items that occur before this marker. The marker can be
    /// found in the `paging` property of a previous response. Only one of
    /// `after` or `before` can be specified.
    #[serde(default)]
    pub before: Option<String>,
}

impl From<GetCardsParams> for ListCardsQuery {
    fn from(params: GetCardsParams) -> Self {
        ListCardsQuery {
            limit: params.limit,
            after: params.after,
            before: params.before,
        }
    }
}

/// The MCP server.
///
/// Cheaply cloneable; every session gets its own copy.
#[derive(Clone)]
pub struct RoyaleServer {
    client: Client,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RoyaleServer {
    /// Creates a new `RoyaleServer`.
    pub fn new(client: Client) -> RoyaleServer {
        RoyaleServer {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "get_cards",
        description = "Get a list of available cards, including their stats, rarity and artwork."
    )]
    pub async fn get_cards(
        &self,
        params: Parameters<GetCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.get_cards(params.0.into()).await {
            Ok(body) => Ok(success(body)),
            Err(err) => failure(err),
        }
    }
}

#[tool_handler]
impl ServerHandler for RoyaleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Clash Royale API tools. Use get_cards to list cards; page through results with \
                 the `after` or `before` markers from the response's `paging` property."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn success(body: Value) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(body.to_string())],
        structured_content: Some(body),
        is_error: Some(false),
        meta: None,
    }
}

/// Bad arguments are a protocol error; anything the API or network did is
/// reported back as a failed tool call.
fn failure(err: Error) -> Result<CallToolResult, McpError> {
    if err.is_invalid_argument() {
        return Err(McpError::invalid_params(err.to_string(), None));
    }

    tracing::warn!(%err, "get_cards failed");

    Ok(CallToolResult {
        content: vec![Content::text(err.to_string())],
        structured_content: err
            .api_error()
            .and_then(|error| serde_json::to_value(error).ok()),
        is_error: Some(true),
        meta: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rmcp::model::ErrorCode;

    use royale_client::config::ApiConfig;

    fn server() -> RoyaleServer {
        // nothing listens here; the tests below never reach the network
        let client = Client::new(&ApiConfig {
            endpoint: "http://127.0.0.1:9/v1/".into(),
            key: Some("test-key".into()),
        })
        .unwrap();

        RoyaleServer::new(client)
    }

    #[tokio::test]
    async fn both_cursors_are_invalid_params() {
        let err = server()
            .get_cards(Parameters(GetCardsParams {
                limit: None,
                after: Some("X".into()),
                before: Some("Y".into()),
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(
            err.message,
            "Only one of 'after' or 'before' can be specified, not both."
        );
    }

    #[test]
    fn get_cards_is_listed_with_schema() {
        let tools = server().tool_router.list_all();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "get_cards");

        let properties = tools[0]
            .input_schema
            .get("properties")
            .and_then(Value::as_object)
            .unwrap();
        assert!(properties.contains_key("limit"));
        assert!(properties.contains_key("after"));
        assert!(properties.contains_key("before"));
    }

    #[test]
    fn params_keep_out_of_range_limit() {
        let params: GetCardsParams = serde_json::from_str(r#"{"limit": -1}"#).unwrap();

        assert_eq!(ListCardsQuery::from(params).limit, Some(-1));
    }

    #[test]
    fn params_accept_missing_fields() {
        let params: GetCardsParams = serde_json::from_str(r#"{"limit": 5}"#).unwrap();

        assert_eq!(
            ListCardsQuery::from(params),
            ListCardsQuery {
                limit: Some(5),
                ..Default::default()
            }
        );
    }
}
