//! # Bot Handle
//!
//! The slice of the Discord bot runtime the control plane drives.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: BotHandle trait extracted so the control surface can be tested without Discord

pub mod discord;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

pub use discord::{build_client, DiscordBot, GatewayHandler};

/// Snapshot of a guild the bot is a member of
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GuildSummary {
    pub id: u64,
    pub name: String,
    pub member_count: Option<u64>,
}

/// Operations the control plane needs from the running bot
#[async_trait]
pub trait BotHandle: Send + Sync {
    /// Push the slash command catalogue to Discord
    ///
    /// Errors are returned to the caller untouched.
    async fn register_commands(&self) -> Result<()>;

    /// Disconnect every shard from the gateway
    async fn shutdown(&self);

    /// Guilds currently known to the gateway cache
    fn guilds(&self) -> Vec<GuildSummary>;
}
