//! # Utility Modules
//!
//! - **Constants** (`constant`) - Service identity and listen defaults
//! - **Settings** (`settings`) - Environment-driven runtime configuration

pub mod constant;
pub mod settings;
