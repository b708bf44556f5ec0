use std::process::ExitCode;

use blocking_responses_api::telemetry;
use blocking_responses_api::utils::settings::{AppEnv, Settings};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    telemetry::init_subscriber(AppEnv::detect());

    let result = match Settings::from_env() {
        Ok(settings) => blocking_responses_api::run(&settings).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server terminated");
            ExitCode::FAILURE
        }
    }
}
