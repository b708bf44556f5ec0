//! # Health Check Handler
//!
//! Liveness endpoint for load balancers, monitoring systems and deployment
//! tools that need to verify the application is running.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::{HEALTH_STATUS, HealthStatus};

/// Health check endpoint that returns `200 OK` with [`HEALTH_STATUS`].
///
/// It performs no dependency checks: a response means the process is up and
/// able to answer HTTP requests.
#[instrument]
pub async fn health_check() -> Json<HealthStatus> {
    debug!("Health check endpoint accessed");
    Json(HEALTH_STATUS)
}
