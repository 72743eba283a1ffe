//! Settings resolvers: registerCommands, restart, settings

use async_graphql::{Context, Object, Result};
use std::sync::Arc;

use super::types::Settings;
use crate::control::SettingsControl;

#[derive(Default)]
pub struct SettingsQuery;

#[Object]
impl SettingsQuery {
    /// Current control plane settings.
    async fn settings(&self, ctx: &Context<'_>) -> Result<Settings> {
        let control = ctx.data::<Arc<SettingsControl>>()?;
        Ok(control.settings().into())
    }
}

#[derive(Default)]
pub struct SettingsMutation;

#[Object]
impl SettingsMutation {
    /// Register the bot's slash commands with Discord.
    async fn register_commands(&self, ctx: &Context<'_>) -> Result<bool> {
        let control = ctx.data::<Arc<SettingsControl>>()?;
        Ok(control.register_commands().await?)
    }

    /// Restart the bot process. Returns false if a restart is already pending.
    async fn restart(&self, ctx: &Context<'_>) -> Result<bool> {
        let control = ctx.data::<Arc<SettingsControl>>()?;
        Ok(control.restart())
    }
}

#[cfg(test)]
mod tests {
    use crate::control::RESTART_DELAY;
    use crate::core::LogBuffer;
    use crate::testing::{test_schema, MockBot, RecordingSupervisor};
    use serde_json::json;
    use std::sync::Arc;

    const SETTINGS_QUERY: &str = "{ settings { hasAlreadyRegisteredCommands } }";

    #[tokio::test]
    async fn test_settings_before_any_mutation() {
        let schema = test_schema(
            Arc::new(MockBot::new()),
            Arc::new(RecordingSupervisor::new()),
            LogBuffer::new(10),
            None,
        );

        let res = schema.execute(SETTINGS_QUERY).await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "settings": { "hasAlreadyRegisteredCommands": false } })
        );
    }

    #[tokio::test]
    async fn test_register_commands_then_settings() {
        let bot = Arc::new(MockBot::new());
        let schema = test_schema(
            bot.clone(),
            Arc::new(RecordingSupervisor::new()),
            LogBuffer::new(10),
            None,
        );

        let res = schema.execute("mutation { registerCommands }").await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);
        assert_eq!(res.data.into_json().unwrap(), json!({ "registerCommands": true }));
        assert_eq!(bot.registrations(), 1);

        let res = schema.execute(SETTINGS_QUERY).await;
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "settings": { "hasAlreadyRegisteredCommands": true } })
        );
    }

    #[tokio::test]
    async fn test_failed_registration_is_api_error() {
        let schema = test_schema(
            Arc::new(MockBot::failing("Discord API unavailable")),
            Arc::new(RecordingSupervisor::new()),
            LogBuffer::new(10),
            None,
        );

        let res = schema.execute("mutation { registerCommands }").await;
        assert_eq!(res.errors.len(), 1);
        assert!(res.errors[0].message.contains("Discord API unavailable"));

        let res = schema.execute(SETTINGS_QUERY).await;
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "settings": { "hasAlreadyRegisteredCommands": false } })
        );
    }

    #[tokio::test]
    async fn test_second_restart_returns_false() {
        let supervisor = Arc::new(RecordingSupervisor::new());
        let schema = test_schema(
            Arc::new(MockBot::new()),
            supervisor.clone(),
            LogBuffer::new(10),
            None,
        );

        let first = schema.execute("mutation { restart }").await;
        assert!(first.errors.is_empty(), "{:?}", first.errors);
        assert_eq!(first.data.into_json().unwrap(), json!({ "restart": true }));

        // Duplicate request is a successful response carrying false
        let second = schema.execute("mutation { restart }").await;
        assert!(second.errors.is_empty(), "{:?}", second.errors);
        assert_eq!(second.data.into_json().unwrap(), json!({ "restart": false }));

        assert_eq!(supervisor.requests(), vec![RESTART_DELAY]);
    }
}
