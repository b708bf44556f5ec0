use serde::Serialize;

use crate::utils::constant::{SERVICE_NAME, SERVICE_TITLE};

/// Body of `GET /`. Fields serialize in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootStatus {
    pub message: &'static str,
    pub status: &'static str,
}

/// Body of `GET /api/health`. Fields serialize in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub const ROOT_STATUS: RootStatus = RootStatus {
    message: SERVICE_TITLE,
    status: "running",
};

pub const HEALTH_STATUS: HealthStatus = HealthStatus {
    status: "healthy",
    service: SERVICE_NAME,
};
