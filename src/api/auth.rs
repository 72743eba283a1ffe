//! Dashboard login resolver

use async_graphql::{Context, Error, Object, Result};

use super::OAuthClientId;
use crate::core::authorize_url;

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// Discord OAuth2 URL the dashboard at `origin` redirects to for login.
    async fn login_url(&self, ctx: &Context<'_>, origin: String) -> Result<String> {
        let client_id = ctx
            .data::<OAuthClientId>()?
            .0
            .as_deref()
            .ok_or_else(|| Error::new("DISCORD_CLIENT_ID is not configured"))?;

        Ok(authorize_url(client_id, &origin))
    }
}
