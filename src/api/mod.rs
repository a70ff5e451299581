//! HTTP server for the voice relay

pub mod chat;
pub mod health;
pub mod page;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::Result;
use crate::config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use crate::relay::Relay;

/// Shared state for API handlers
///
/// Immutable after startup; requests never coordinate through it.
#[derive(Clone)]
pub struct ApiState {
    pub relay: Relay,
}

/// Build the full application router
///
/// `debug` raises request tracing from debug to info level.
pub fn router(state: Arc<ApiState>, debug: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let level = if debug { Level::INFO } else { Level::DEBUG };
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(level))
        .on_request(DefaultOnRequest::new().level(level))
        .on_response(DefaultOnResponse::new().level(level));

    Router::new()
        .merge(page::router())
        .merge(health::router())
        .merge(chat::router(state))
        .layer(cors)
        .layer(trace)
}

/// Configuration for building an API server
pub struct ApiServerBuilder {
    relay: Relay,
    config: ServerConfig,
}

impl ApiServerBuilder {
    /// Create a new API server builder
    #[must_use]
    pub fn new(relay: Relay) -> Self {
        Self {
            relay,
            config: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                debug: false,
            },
        }
    }

    /// Take host, port and debug mode from the server configuration
    #[must_use]
    pub fn server_config(mut self, config: &ServerConfig) -> Self {
        self.config.clone_from(config);
        self
    }

    /// Build the API server
    #[must_use]
    pub fn build(self) -> ApiServer {
        ApiServer {
            state: Arc::new(ApiState { relay: self.relay }),
            config: self.config,
        }
    }
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    config: ServerConfig,
}

impl ApiServer {
    /// Run the API server until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Server(format!("failed to bind {addr}: {e}")))?;

        tracing::info!(
            addr = %addr,
            debug = self.config.debug,
            model = self.state.relay.model(),
            "voice relay listening"
        );
        tracing::info!(
            "open http://localhost:{} and click the microphone to talk",
            self.config.port
        );

        axum::serve(listener, router(self.state, self.config.debug))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| crate::Error::Server(format!("API server error: {e}")))?;

        tracing::info!("voice relay stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown requested");
    }
}
