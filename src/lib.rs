// Core layer - configuration, log capture, OAuth helpers
pub mod core;

// Bot runtime - Discord client handle and gateway events
pub mod bot;

// Slash command definitions and dispatch
pub mod commands;

// Control surface - restart, command registration, settings
pub mod control;

// API layer - GraphQL schema and HTTP/WebSocket server
pub mod api;

#[cfg(test)]
pub(crate) mod testing;

// Re-export core config for convenience
pub use crate::core::Config;

pub use api::{build_schema, ApiSchema};
pub use bot::{BotHandle, DiscordBot};
pub use control::{SelfRespawn, SettingsControl, Supervisor};
