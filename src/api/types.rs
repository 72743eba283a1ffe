//! GraphQL object types

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

use crate::bot::GuildSummary;
use crate::control;
use crate::core::LogRecord;

#[derive(SimpleObject, Debug, Clone)]
pub struct Settings {
    pub has_already_registered_commands: bool,
}

impl From<control::Settings> for Settings {
    fn from(settings: control::Settings) -> Self {
        Settings {
            has_already_registered_commands: settings.has_already_registered_commands,
        }
    }
}

/// A guild the bot is in
#[derive(SimpleObject, Debug, Clone)]
pub struct Guild {
    /// Snowflake rendered as a string, it does not fit a GraphQL Int
    pub id: String,
    pub name: String,
    pub member_count: Option<u64>,
}

impl From<GuildSummary> for Guild {
    fn from(guild: GuildSummary) -> Self {
        Guild {
            id: guild.id.to_string(),
            name: guild.name,
            member_count: guild.member_count,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl From<LogRecord> for LogEntry {
    fn from(record: LogRecord) -> Self {
        LogEntry {
            timestamp: record.timestamp,
            level: record.level,
            target: record.target,
            message: record.message,
        }
    }
}
