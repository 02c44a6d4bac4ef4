//! Serving the MCP server over its transports.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Error;

use axum::{Router, extract::Request};

use axum_server::Handle;

use rmcp::{
    ServiceExt as _,
    transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    },
};

use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::tools::RoyaleServer;

/// How long open sessions get to finish after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Builds the HTTP router with the MCP endpoint mounted at `path`.
pub fn router(server: RoyaleServer, path: &str) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    Router::new().nest_service(path, service).layer(
        TraceLayer::new_for_http().make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            tracing::debug_span!("request", %method, %uri)
        }),
    )
}

/// Resolves the configured host, which may be an IP address or a host name.
pub async fn bind_addr(config: &ServerConfig) -> Result<SocketAddr, Error> {
    tokio::net::lookup_host((config.host.as_str(), config.port))
        .await?
        .next()
        .ok_or_else(|| Error::msg(format!("`{}` did not resolve to an address", config.host)))
}

/// Serves over streamable HTTP until interrupted.
pub async fn serve_http(server: RoyaleServer, config: &ServerConfig) -> Result<(), Error> {
    let addr = bind_addr(config).await?;
    let path = config.mount_path();

    let router = router(server, &path);

    let handle = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    tracing::info!("listening on http://{}{} (streamable http)", addr, path);

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .map_err(From::from)
}

/// Serves over stdin and stdout until the peer hangs up.
pub async fn serve_stdio(server: RoyaleServer) -> Result<(), Error> {
    tracing::info!("serving on stdio");

    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        return;
    }

    tracing::info!("shutting down");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}
