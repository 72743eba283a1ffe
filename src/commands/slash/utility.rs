//! Utility slash commands: /ping, /uptime, /version

use serenity::builder::CreateApplicationCommand;

/// Creates utility commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_ping_command(),
        create_uptime_command(),
        create_version_command(),
    ]
}

fn create_ping_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("ping")
        .description("Test bot responsiveness")
        .to_owned()
}

fn create_uptime_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("uptime")
        .description("Show how long the bot has been running")
        .to_owned()
}

fn create_version_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("version")
        .description("Show the running bot version")
        .to_owned()
}
