//! Test doubles for the bot handle and supervisor

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::{build_schema, ApiSchema};
use crate::bot::{BotHandle, GuildSummary};
use crate::control::{SettingsControl, Supervisor};
use crate::core::LogBuffer;

/// Bot handle that counts calls instead of talking to Discord
#[derive(Default)]
pub struct MockBot {
    registrations: AtomicUsize,
    shutdowns: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    failure: Option<String>,
    latency: Option<Duration>,
    guilds: Vec<GuildSummary>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration always fails with `message`
    pub fn failing(message: &str) -> Self {
        MockBot {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_guilds(mut self, guilds: Vec<GuildSummary>) -> Self {
        self.guilds = guilds;
        self
    }

    pub fn registrations(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }

    pub fn shutdowns(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }

    /// Highest number of registrations observed running at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BotHandle for MockBot {
    async fn register_commands(&self) -> Result<()> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            bail!("{message}");
        }
        Ok(())
    }

    async fn shutdown(&self) {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
    }

    fn guilds(&self) -> Vec<GuildSummary> {
        self.guilds.clone()
    }
}

/// Supervisor that records requested delays without restarting anything
#[derive(Default)]
pub struct RecordingSupervisor {
    requests: Mutex<Vec<Duration>>,
}

impl RecordingSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<Duration> {
        self.requests.lock().unwrap().clone()
    }
}

impl Supervisor for RecordingSupervisor {
    fn schedule_restart(&self, delay: Duration) {
        self.requests.lock().unwrap().push(delay);
    }
}

/// Schema wired to test doubles
pub fn test_schema(
    bot: Arc<MockBot>,
    supervisor: Arc<RecordingSupervisor>,
    logs: LogBuffer,
    client_id: Option<&str>,
) -> ApiSchema {
    let control = Arc::new(SettingsControl::new(bot, supervisor));
    build_schema(control, logs, client_id.map(str::to_string))
}
