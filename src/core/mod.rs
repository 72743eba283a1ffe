//! # Core Module
//!
//! Configuration, log capture and OAuth helpers shared by the bot and the
//! control plane API.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Add logging (captured log buffer) and oauth (dashboard login URL)
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod logging;
pub mod oauth;

// Re-export commonly used items
pub use config::Config;
pub use logging::{LogBuffer, LogRecord, LOG_BUFFER_CAPACITY};
pub use oauth::authorize_url;

/// Crate version reported by `/version` and the health endpoint
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
