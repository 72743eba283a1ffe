//! Utility command handlers
//!
//! Handles: ping, uptime, version
//!
//! - **Version**: 2.1.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.1.0: Return reply text; the gateway handler sends it
//! - 2.0.0: Drop usage logging (no persistence layer), drop help/status
//! - 1.0.0: Extracted from command_handler.rs

use std::time::Duration;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::core::get_bot_version;

/// Handler for utility commands: ping, uptime, version
pub struct UtilityHandler;

impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ping", "uptime", "version"]
    }

    fn reply(&self, ctx: &CommandContext, command: &str) -> Option<String> {
        match command {
            "ping" => Some("Pong!".to_string()),
            "uptime" => Some(format_uptime(ctx.uptime())),
            "version" => Some(format!("**maestro v{}**", get_bot_version())),
            _ => None,
        }
    }
}

/// Render an uptime, omitting leading zero units
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("⏱️ Uptime: {days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("⏱️ Uptime: {hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("⏱️ Uptime: {minutes}m {seconds}s")
    } else {
        format!("⏱️ Uptime: {seconds}s")
    }
}
