//! # Centralized Error Handling
//!
//! Two error types live here: [`AppError`] for the handful of non-2xx
//! responses the router produces itself, and [`StartupError`] for the fatal
//! failures that end the process with a non-zero exit code.

use std::io;
use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors returned to clients. Neither variant is a failure of the service
/// itself, so nothing is logged above `debug` level.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Fatal errors raised while bringing the server up or running its accept loop.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
