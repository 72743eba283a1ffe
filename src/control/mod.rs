//! # Control Surface
//!
//! Administrative operations on the running bot process: command
//! registration, restart, settings, and OS signal handling.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false

pub mod settings;
pub mod signals;
pub mod supervisor;

pub use settings::{Settings, SettingsControl, SettingsState, RESTART_DELAY};
pub use signals::shutdown_signal;
pub use supervisor::{spawn_delayed, Invocation, SelfRespawn, Supervisor};
