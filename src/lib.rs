//! # Blocking Responses API - Liveness Service
//!
//! A placeholder deployment of the Blocking Responses API that answers two
//! informational routes with constant JSON payloads.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the root and health routes
//! - [`models`] - Constant response records
//! - [`error`] - Response-side and startup error types
//! - [`shutdown`] - OS signal handling for graceful shutdown
//! - [`telemetry`] - Global tracing subscriber setup
//! - [`utils`] - Constants and environment-driven settings

pub mod error;
pub mod handlers;
pub mod models;
pub mod shutdown;
pub mod telemetry;
pub mod utils;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

use crate::error::StartupError;
use crate::handlers::{health_check, method_not_allowed, not_found, root};
use crate::utils::constant::{SERVICE_NAME, SERVICE_VERSION};
use crate::utils::settings::Settings;

/// Creates the Axum router with both informational routes.
///
/// Unknown paths are answered by [`not_found`], and a known path requested
/// with anything other than `GET`/`HEAD` by [`method_not_allowed`].
pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds a TCP listener on `addr`.
///
/// # Errors
///
/// Returns [`StartupError::Bind`] when the address is already in use or
/// cannot be bound for any other reason.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serves [`app`] on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to complete before this returns.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(StartupError::Serve)?;
    info!(
        service = SERVICE_NAME,
        version = SERVICE_VERSION,
        "Server listening at http://{}",
        addr
    );

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)?;

    info!("Server shutdown complete");
    Ok(())
}

/// Binds the configured address and serves until SIGINT or SIGTERM.
pub async fn run(settings: &Settings) -> Result<(), StartupError> {
    let listener = bind(settings.socket_addr()).await?;
    serve(listener, shutdown::shutdown_signal()).await
}
