//! Discord OAuth2 login URL for the dashboard
//!
//! The dashboard uses the implicit grant: Discord redirects back to
//! `<origin>/login` with the access token in the URL fragment.

/// Discord OAuth2 authorize endpoint
pub const DISCORD_AUTHORIZE_URL: &str = "https://discordapp.com/api/oauth2/authorize";

/// Scopes requested for dashboard login
pub const LOGIN_SCOPES: &[&str] = &["identify", "guilds"];

/// Path on the dashboard origin that receives the OAuth redirect
pub const LOGIN_CALLBACK_PATH: &str = "/login";

/// Build the "Login with Discord" authorize URL for a dashboard origin
pub fn authorize_url(client_id: &str, origin: &str) -> String {
    let redirect = format!("{}{}", origin.trim_end_matches('/'), LOGIN_CALLBACK_PATH);

    format!(
        "{}?client_id={}&response_type=token&scope={}&redirect_uri={}",
        DISCORD_AUTHORIZE_URL,
        urlencoding::encode(client_id),
        urlencoding::encode(&LOGIN_SCOPES.join(" ")),
        urlencoding::encode(&redirect)
    )
}
