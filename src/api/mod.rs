//! # Control Plane API
//!
//! GraphQL schema over the control surface, the bot's guilds and its log,
//! plus the axum server that exposes it to the dashboard.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Settings, guilds, logs and auth resolvers; HTTP + WebSocket transport

pub mod auth;
pub mod guilds;
pub mod logs;
pub mod server;
pub mod settings;
pub mod types;

use anyhow::{Context, Result};
use async_graphql::{MergedObject, Schema};
use std::sync::Arc;

use crate::control::SettingsControl;
use crate::core::LogBuffer;

pub use server::{bind, router, serve};

/// Root query type composing all resolver groups
#[derive(MergedObject, Default)]
pub struct QueryRoot(
    settings::SettingsQuery,
    guilds::GuildQuery,
    logs::LogQuery,
    auth::AuthQuery,
);

/// Root mutation type
#[derive(MergedObject, Default)]
pub struct MutationRoot(settings::SettingsMutation);

pub type SubscriptionRoot = logs::LogSubscription;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// OAuth2 client id for building the dashboard login URL
#[derive(Debug, Clone, Default)]
pub struct OAuthClientId(pub Option<String>);

/// Assemble the schema; the control surface and log buffer live in its data
pub fn build_schema(
    control: Arc<SettingsControl>,
    logs: LogBuffer,
    oauth_client_id: Option<String>,
) -> ApiSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot::default(),
    )
    .data(control)
    .data(logs)
    .data(OAuthClientId(oauth_client_id))
    .finish()
}

/// Write the schema definition language to `path`
pub fn write_sdl(schema: &ApiSchema, path: &str) -> Result<()> {
    std::fs::write(path, schema.sdl())
        .with_context(|| format!("Failed to write API schema to {path}"))
}
