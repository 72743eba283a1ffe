//! Slash command handler trait
//!
//! Handlers only compute the reply text; sending it back over the
//! interaction is left to the gateway handler.
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Handlers return reply content instead of talking to Discord
//! - 1.0.0: Initial async handler trait

use super::context::CommandContext;

/// A group of slash commands answered with a plain message
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler answers
    fn command_names(&self) -> &'static [&'static str];

    /// Reply content for `command`, or `None` if it is not one of ours
    fn reply(&self, ctx: &CommandContext, command: &str) -> Option<String>;
}
