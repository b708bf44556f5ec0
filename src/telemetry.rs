//! # Tracing Setup
//!
//! Development builds log human-readable lines; production logs bunyan JSON
//! to stdout so the platform's log collector can index the fields.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::utils::constant::{DEFAULT_LOG_FILTER, SERVICE_NAME};
use crate::utils::settings::AppEnv;

/// Installs the global subscriber. `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
///
/// Must be called at most once per process.
pub fn init_subscriber(app_env: AppEnv) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match app_env {
        AppEnv::Production => tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                SERVICE_NAME.to_string(),
                std::io::stdout,
            ))
            .init(),
        AppEnv::Development => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}
