//! Environment-driven configuration
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Control plane settings (API host/port, schema path, OAuth client id)
//! - 1.0.0: Initial Discord token and log level loading

use anyhow::{anyhow, Context, Result};

/// Default port for the control plane API
pub const DEFAULT_API_PORT: u16 = 4000;

/// Default bind address for the control plane API
pub const DEFAULT_API_HOST: &str = "0.0.0.0";

/// Default log filter when neither LOG_LEVEL nor RUST_LOG is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Development guild; commands are registered there instead of globally
    pub discord_guild_id: Option<String>,
    /// OAuth2 application id used to build the dashboard login URL
    pub discord_client_id: Option<String>,
    pub api_host: String,
    pub api_port: u16,
    /// Where to write the GraphQL SDL on startup, if anywhere
    pub api_schema_path: Option<String>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from process environment variables
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values are treated as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token =
            get("DISCORD_TOKEN").ok_or_else(|| anyhow!("DISCORD_TOKEN must be set"))?;

        let api_port = match get("API_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("API_PORT is not a valid port: {raw}"))?,
            None => DEFAULT_API_PORT,
        };

        Ok(Config {
            discord_token,
            discord_guild_id: get("DISCORD_GUILD_ID"),
            discord_client_id: get("DISCORD_CLIENT_ID"),
            api_host: get("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_port,
            api_schema_path: get("API_SCHEMA_PATH"),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Socket address string for the API listener
    pub fn api_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.api_port, DEFAULT_API_PORT);
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.log_level, "info");
        assert!(config.discord_guild_id.is_none());
        assert!(config.discord_client_id.is_none());
        assert!(config.api_schema_path.is_none());
        assert_eq!(config.api_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn test_missing_token_is_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DISCORD_TOKEN"));
    }

    #[test]
    fn test_blank_token_is_error() {
        assert!(Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_GUILD_ID", "1234"),
            ("DISCORD_CLIENT_ID", "5678"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "8080"),
            ("API_SCHEMA_PATH", "schema.graphql"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.discord_guild_id.as_deref(), Some("1234"));
        assert_eq!(config.discord_client_id.as_deref(), Some("5678"));
        assert_eq!(config.api_addr(), "127.0.0.1:8080");
        assert_eq!(config.api_schema_path.as_deref(), Some("schema.graphql"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("API_PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("API_PORT"));
    }
}
