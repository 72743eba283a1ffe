//! # Command System
//!
//! Slash command (/) definitions and dispatch for Discord interactions.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Registration takes an HTTP handle so the control plane can trigger it
//! - 2.1.0: Add modular handler infrastructure (handler trait, context, registry)
//! - 2.0.0: Slash-only command system

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::SlashCommandHandler;
pub use registry::CommandRegistry;

pub use slash::{create_slash_commands, register_global_commands, register_guild_commands};
