use axum::Json;
use tracing::{debug, instrument};

use crate::models::{ROOT_STATUS, RootStatus};

/// Root endpoint: names the service and reports that it is running.
#[instrument]
pub async fn root() -> Json<RootStatus> {
    debug!("Root endpoint accessed");
    Json(ROOT_STATUS)
}
