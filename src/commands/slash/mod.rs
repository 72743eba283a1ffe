//! # Slash Commands (/)
//!
//! Discord native slash command definitions and registration.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Register through an HTTP handle instead of a gateway Context
//! - 1.0.0: Reorganized from monolithic slash_commands.rs

mod utility;

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::application::command::Command;
use serenity::model::id::GuildId;

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    let mut commands = Vec::new();

    // Utility commands
    commands.extend(utility::create_commands());

    commands
}

/// Registers all slash commands globally
///
/// Global commands can take up to an hour to propagate.
pub async fn register_global_commands(http: &Http) -> Result<()> {
    let slash_commands = create_slash_commands();
    let count = slash_commands.len();

    Command::set_global_application_commands(http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!("Global slash commands registered successfully ({count} commands)");
    Ok(())
}

/// Registers all slash commands for a specific guild (faster for testing)
pub async fn register_guild_commands(http: &Http, guild_id: GuildId) -> Result<()> {
    let slash_commands = create_slash_commands();
    let count = slash_commands.len();

    guild_id
        .set_application_commands(http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!("Guild slash commands registered for guild {guild_id} ({count} commands)");
    Ok(())
}
