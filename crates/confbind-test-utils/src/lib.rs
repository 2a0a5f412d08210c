//! Test helpers shared across confbind crates.

pub mod files;
pub mod models;

pub use files::{permissions_enforced, read_json, write_config};
pub use models::{DEFAULT_VALUE, Endpoint, ServiceConfig, TestConfig};
