//! # HTTP Request Handlers
//!
//! Every handler answers from constants and never touches I/O.
//!
//! ## Available Handlers
//!
//! - **Root** (`root`) - Service banner at `/`
//! - **Health Check** (`health_check`) - Liveness probe at `/api/health`
//! - **Fallback** (`fallback`) - Unmatched paths and unsupported methods

mod fallback;
mod health_check;
mod root;

pub use fallback::*;
pub use health_check::*;
pub use root::*;
