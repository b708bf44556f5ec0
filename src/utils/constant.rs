//! # Application Constants
//!
//! Service identity strings and the defaults used when the environment does
//! not say otherwise.

use std::net::{IpAddr, Ipv4Addr};

/// Human-readable service title, returned by `GET /`.
pub const SERVICE_TITLE: &str = "Blocking Responses API";

/// Machine-readable service identifier, returned by `GET /api/health`.
pub const SERVICE_NAME: &str = "blocking-responses-api";

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port used when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 8000;

/// Interface used when `HOST` is unset or unusable. Listens on all interfaces.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "blocking_responses_api=info,tower_http=info";
