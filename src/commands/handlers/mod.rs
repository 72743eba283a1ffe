//! Per-command handler implementations
//!
//! - **Version**: 3.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 3.0.0: Utility commands only; administration moved to the control plane API
//! - 1.0.0: Initial extraction from monolithic command_handler.rs

pub mod utility;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![Arc::new(utility::UtilityHandler)]
}
