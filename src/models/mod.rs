mod status;

pub use status::{HEALTH_STATUS, HealthStatus, ROOT_STATUS, RootStatus};
