//! Guild resolvers

use async_graphql::{Context, Object, Result};
use std::sync::Arc;

use super::types::Guild;
use crate::control::SettingsControl;

#[derive(Default)]
pub struct GuildQuery;

#[Object]
impl GuildQuery {
    /// Guilds the bot is currently a member of.
    async fn guilds(&self, ctx: &Context<'_>) -> Result<Vec<Guild>> {
        let control = ctx.data::<Arc<SettingsControl>>()?;
        Ok(control.bot().guilds().into_iter().map(Guild::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::bot::GuildSummary;
    use crate::core::LogBuffer;
    use crate::testing::{test_schema, MockBot, RecordingSupervisor};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_guilds_query() {
        let bot = MockBot::new().with_guilds(vec![
            GuildSummary {
                id: 912345678901234567,
                name: "Maestro HQ".to_string(),
                member_count: Some(12),
            },
            GuildSummary {
                id: 42,
                name: "Guild 42".to_string(),
                member_count: None,
            },
        ]);
        let schema = test_schema(
            Arc::new(bot),
            Arc::new(RecordingSupervisor::new()),
            LogBuffer::new(10),
            None,
        );

        let res = schema.execute("{ guilds { id name memberCount } }").await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({
                "guilds": [
                    { "id": "912345678901234567", "name": "Maestro HQ", "memberCount": 12 },
                    { "id": "42", "name": "Guild 42", "memberCount": null },
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_no_guilds() {
        let schema = test_schema(
            Arc::new(MockBot::new()),
            Arc::new(RecordingSupervisor::new()),
            LogBuffer::new(10),
            None,
        );

        let res = schema.execute("{ guilds { id } }").await;
        assert_eq!(res.data.into_json().unwrap(), json!({ "guilds": [] }));
    }
}
