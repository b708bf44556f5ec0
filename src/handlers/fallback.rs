use axum::http::{Method, Uri};
use tracing::{debug, instrument};

use crate::error::AppError;

/// Answers any path without a route with `404 Not Found`.
#[instrument(skip_all, fields(%method, %uri))]
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    debug!("No route matched");
    AppError::NotFound
}

/// Answers a known path requested with an unsupported method.
#[instrument(skip_all, fields(%method, %uri))]
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    debug!("Method not allowed on this route");
    AppError::MethodNotAllowed
}
