//! Settings control surface
//!
//! Gates and reports the two administrative actions the dashboard can take
//! against the live bot: command registration and restart.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Explicit SettingsState replaces resolver-held flags

use anyhow::Result;
use log::{info, warn};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::supervisor::Supervisor;
use crate::bot::BotHandle;

/// Time between accepting a restart and the process exiting, so the
/// response can reach the caller first
pub const RESTART_DELAY: Duration = Duration::from_secs(5);

/// Process-lifetime control flags
///
/// Both flags only ever go from false to true.
#[derive(Debug, Default)]
pub struct SettingsState {
    has_already_registered_commands: AtomicBool,
    is_restarting: AtomicBool,
}

impl SettingsState {
    pub fn has_already_registered_commands(&self) -> bool {
        self.has_already_registered_commands.load(Ordering::SeqCst)
    }

    pub fn is_restarting(&self) -> bool {
        self.is_restarting.load(Ordering::SeqCst)
    }

    fn mark_registered(&self) {
        self.has_already_registered_commands
            .store(true, Ordering::SeqCst);
    }

    /// Flip `is_restarting` on; true only for the caller that flipped it
    fn begin_restart(&self) -> bool {
        self.is_restarting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// Read-only snapshot returned by the settings query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub has_already_registered_commands: bool,
}

/// Administrative operations exposed over the API
pub struct SettingsControl {
    bot: Arc<dyn BotHandle>,
    supervisor: Arc<dyn Supervisor>,
    state: SettingsState,
}

impl SettingsControl {
    pub fn new(bot: Arc<dyn BotHandle>, supervisor: Arc<dyn Supervisor>) -> Self {
        SettingsControl {
            bot,
            supervisor,
            state: SettingsState::default(),
        }
    }

    /// Register slash commands with Discord
    ///
    /// Registration errors propagate and leave the flag untouched. Overlapping
    /// calls are not serialized; each one reaches the bot.
    pub async fn register_commands(&self) -> Result<bool> {
        self.bot.register_commands().await?;
        self.state.mark_registered();
        info!("✅ Slash commands registered via control plane");
        Ok(true)
    }

    /// Request a process restart
    ///
    /// Returns false when a restart is already pending. Otherwise the
    /// supervisor is asked to restart after [`RESTART_DELAY`] and this returns
    /// true straight away.
    pub fn restart(&self) -> bool {
        if !self.state.begin_restart() {
            return false;
        }

        warn!("Manual restart requested");
        self.supervisor.schedule_restart(RESTART_DELAY);
        true
    }

    pub fn settings(&self) -> Settings {
        Settings {
            has_already_registered_commands: self.state.has_already_registered_commands(),
        }
    }

    pub fn state(&self) -> &SettingsState {
        &self.state
    }

    pub fn bot(&self) -> &Arc<dyn BotHandle> {
        &self.bot
    }
}
