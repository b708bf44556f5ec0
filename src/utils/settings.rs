//! # Runtime Settings
//!
//! Values are read once at startup. An unusable `PORT` falls back to
//! [`DEFAULT_PORT`] with a warning. An unusable `HOST` is rejected with
//! [`StartupError::InvalidHost`], so a request for a specific interface is
//! never silently widened to all interfaces.

use std::env;
use std::net::{IpAddr, SocketAddr};

use tracing::warn;

use crate::error::StartupError;
use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT};

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    /// Reads `APP_ENV` from the process environment.
    pub fn detect() -> Self {
        env::var("APP_ENV")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// `"production"` in any letter case selects [`AppEnv::Production`];
    /// every other value selects [`AppEnv::Development`].
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

/// Listen address of the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Reads `HOST` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `HOST` and `PORT` through `lookup`, which returns `None` for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::InvalidHost`] when `HOST` is set but is not an
    /// IP address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| StartupError::InvalidHost { value: raw })?,
            None => defaults.host,
        };

        Ok(Self {
            host,
            port: parse_or_default("PORT", lookup("PORT"), defaults.port),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, %default, "Ignoring invalid environment value");
            default
        }
    }
}
