//! Command handler registry
//!
//! - **Version**: 1.1.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 1.1.0: Build from the default handler set
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use super::handlers::create_all_handlers;

/// Registry mapping command names to handlers
///
/// Multiple command names can map to the same handler if they share logic.
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry holding every built-in handler
    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler for its declared command names
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get handler for a command name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    ///
    /// Note: This counts command names, not unique handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
