//! Deep-link HTTP server.
//!
//! # Responsibilities
//! - Create Axum Router answering every GET path
//! - Resolve the requested address against the route table
//! - Render the app shell (200) or the not-found shell (404)
//! - Wire up tracing middleware and graceful shutdown
//!
//! Clean-path history only works when the host answers deep links such as
//! `/app/operadora/123` with the app shell; this server is that host.

use std::sync::Arc;

use axum::{
    extract::State,
    http::Uri,
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::RouterConfig;
use crate::http::response::render_outcome;
use crate::routing::{RouteTable, WebHistory};
use crate::shell;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub history: Arc<WebHistory>,
}

/// HTTP server for the app shell.
pub struct ShellServer {
    router: Router,
    config: RouterConfig,
}

impl ShellServer {
    /// Create a new server over an already-built route table.
    pub fn new(config: RouterConfig, table: Arc<RouteTable>) -> Self {
        let state = AppState {
            table,
            history: Arc::new(WebHistory::new(&config.history.base_path)),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(shell_handler))
            .route("/{*path}", get(shell_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.history.base_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The router, for driving the server without a listener.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Resolve the request address and render the matching shell.
async fn shell_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let address = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    match shell::resolve(&state.table, &state.history, address) {
        Ok(outcome) => {
            if outcome.is_not_found() {
                tracing::warn!(address = %address, "No route matched");
            }
            render_outcome(&outcome, state.history.base())
        }
        Err(e) => {
            tracing::error!(address = %address, error = %e, "Failed to instantiate view");
            render_outcome(
                &shell::Outcome::NotFound {
                    location: address.to_string(),
                },
                state.history.base(),
            )
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
