//! HTTP relay for the members JSON document.
//!
//! Exposes a single route, `GET /api/users`, which fetches the configured
//! upstream document and returns it verbatim. Any upstream failure becomes a
//! plain `500 Internal Server Error`. Cross-origin requests are allowed from
//! any origin.
//!
//! ```rust,ignore
//! use relay_config::RelayConfig;
//!
//! relay_server::serve(RelayConfig::from_env()?).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod upstream;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use relay_config::RelayConfig;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::upstream::{UpstreamClient, UpstreamError};

/// Path of the relayed resource.
pub const USERS_PATH: &str = "/api/users";

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub config: RelayConfig,
    pub upstream: UpstreamClient,
}

impl ServerState {
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(Self { config, upstream })
    }
}

/// Builds the router with request tracing and permissive CORS.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!("relay", method = %req.method(), path = %req.uri().path())
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                status = res.status().as_u16(),
                elapsed_ms = latency.as_millis() as u64,
                "Request completed"
            );
        })
        .on_failure(());

    Router::new()
        .route(USERS_PATH, get(handlers::users::list))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Serves the relay on an already bound listener until the process exits.
///
/// The startup line is logged only after the upstream client is built.
pub async fn run(listener: TcpListener, config: RelayConfig) -> Result<()> {
    let state = Arc::new(ServerState::new(config)?);
    let port = listener.local_addr()?.port();
    info!("Server is running on port {}", port);
    info!("Relaying {} at {}", state.upstream.url(), USERS_PATH);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

/// Binds `0.0.0.0:<port>` and serves the relay.
pub async fn serve(config: RelayConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    run(listener, config).await
}
