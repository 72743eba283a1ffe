//! Serenity-backed bot runtime
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: DiscordBot handle and gateway event handler

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info, warn};
use serenity::cache::Cache;
use serenity::client::bridge::gateway::ShardManager;
use serenity::http::Http;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use super::{BotHandle, GuildSummary};
use crate::commands::{register_global_commands, register_guild_commands, CommandContext, CommandRegistry};
use crate::core::Config;

/// Live handle on the connected Discord client
pub struct DiscordBot {
    http: Arc<Http>,
    cache: Arc<Cache>,
    shard_manager: Arc<Mutex<ShardManager>>,
    /// When set, commands are registered for this guild only
    guild_id: Option<GuildId>,
}

impl DiscordBot {
    /// Take the shared handles out of a built (not yet started) client
    pub fn from_client(client: &Client, guild_id: Option<GuildId>) -> Self {
        DiscordBot {
            http: client.cache_and_http.http.clone(),
            cache: client.cache_and_http.cache.clone(),
            shard_manager: client.shard_manager.clone(),
            guild_id,
        }
    }
}

#[async_trait]
impl BotHandle for DiscordBot {
    async fn register_commands(&self) -> Result<()> {
        match self.guild_id {
            Some(guild_id) => register_guild_commands(&self.http, guild_id).await,
            None => register_global_commands(&self.http).await,
        }
    }

    async fn shutdown(&self) {
        info!("Shutting down Discord shards...");
        self.shard_manager.lock().await.shutdown_all().await;
    }

    fn guilds(&self) -> Vec<GuildSummary> {
        self.cache
            .guilds()
            .into_iter()
            .map(|guild_id| match self.cache.guild(guild_id) {
                Some(guild) => GuildSummary {
                    id: guild_id.0,
                    name: guild.name.clone(),
                    member_count: Some(guild.member_count),
                },
                // Guild not in cache yet, use placeholder
                None => GuildSummary {
                    id: guild_id.0,
                    name: format!("Guild {}", guild_id.0),
                    member_count: None,
                },
            })
            .collect()
    }
}

/// Gateway event handler: readiness logging and slash command dispatch
pub struct GatewayHandler {
    registry: CommandRegistry,
    context: CommandContext,
}

impl GatewayHandler {
    pub fn new(registry: CommandRegistry, context: CommandContext) -> Self {
        GatewayHandler {
            registry,
            context,
        }
    }
}

#[async_trait]
impl EventHandler for GatewayHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };

        let Some(handler) = self.registry.get(&command.data.name) else {
            warn!("No handler registered for /{}", command.data.name);
            return;
        };

        let Some(content) = handler.reply(&self.context, &command.data.name) else {
            return;
        };

        let sent = command
            .create_interaction_response(&ctx.http, |r| {
                r.kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|m| m.content(content))
            })
            .await;

        match sent {
            Ok(()) => info!(
                "{} command completed for user {}",
                command.data.name, command.user.id
            ),
            Err(e) => error!("Error handling /{}: {e}", command.data.name),
        }
    }
}

/// Build the Discord client and the handle the control plane uses
///
/// The client still has to be started by the caller.
pub async fn build_client(config: &Config, context: CommandContext) -> Result<(Client, DiscordBot)> {
    // Parse guild ID if provided for development mode
    let guild_id = config
        .discord_guild_id
        .as_ref()
        .and_then(|id| id.parse::<u64>().ok())
        .map(GuildId);

    if guild_id.is_none() && config.discord_guild_id.is_some() {
        warn!("DISCORD_GUILD_ID is not a valid id, registering commands globally");
    }

    let handler = GatewayHandler::new(CommandRegistry::with_default_handlers(), context);
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    let bot = DiscordBot::from_client(&client, guild_id);
    Ok((client, bot))
}
