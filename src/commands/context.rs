//! Shared context for command handlers
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Reduced to process start time; no persistence layer
//! - 1.0.0: Initial implementation with core shared state

use std::time::{Duration, Instant};

/// Shared context for all command handlers
#[derive(Clone)]
pub struct CommandContext {
    pub start_time: Instant,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::with_start_time(Instant::now())
    }

    /// Create a CommandContext with a specific start time (for sharing with the API layer)
    pub fn with_start_time(start_time: Instant) -> Self {
        Self { start_time }
    }

    /// Time elapsed since the bot process started
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
