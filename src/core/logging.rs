//! Log capture for the control plane
//!
//! Installs an `env_logger` backed logger that also keeps the most recent
//! records in memory and broadcasts new ones, so the dashboard can query and
//! follow the bot's log without shell access.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Ring buffer plus broadcast channel around env_logger

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{Log, Metadata, Record};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

/// Number of records kept for the `logs` query
pub const LOG_BUFFER_CAPACITY: usize = 500;

/// Broadcast channel capacity for live log subscribers
const LOG_CHANNEL_CAPACITY: usize = 256;

/// A captured log record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    fn from_record(record: &Record) -> Self {
        LogRecord {
            timestamp: Utc::now(),
            level: record.level().to_string(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

/// Bounded, shareable store of recent log records
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
    tx: broadcast::Sender<LogRecord>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(LOG_CHANNEL_CAPACITY);
        LogBuffer {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
            tx,
        }
    }

    /// Store a record, evicting the oldest when full, and notify subscribers
    pub fn push(&self, record: LogRecord) {
        {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            if entries.len() >= self.capacity {
                entries.pop_front();
            }
            entries.push_back(record.clone());
        }

        // No subscribers is fine
        let _ = self.tx.send(record);
    }

    /// The newest `limit` records in chronological order
    ///
    /// `None` or a limit above capacity returns everything buffered.
    pub fn recent(&self, limit: Option<usize>) -> Vec<LogRecord> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let limit = limit.unwrap_or(self.capacity).min(entries.len());
        entries.iter().skip(entries.len() - limit).cloned().collect()
    }

    /// Receive every record pushed from now on
    pub fn subscribe(&self) -> broadcast::Receiver<LogRecord> {
        self.tx.subscribe()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LOG_BUFFER_CAPACITY)
    }
}

/// `log::Log` implementation writing through env_logger and into a `LogBuffer`
pub struct CapturingLogger {
    inner: env_logger::Logger,
    buffer: LogBuffer,
}

impl CapturingLogger {
    pub fn new(inner: env_logger::Logger, buffer: LogBuffer) -> Self {
        CapturingLogger { inner, buffer }
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.inner.matches(record) {
            return;
        }
        self.inner.log(record);
        self.buffer.push(LogRecord::from_record(record));
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Install the capturing logger as the global logger
///
/// `default_level` applies when RUST_LOG is not set. Returns the buffer the
/// API layer reads from.
pub fn init(default_level: &str) -> Result<LogBuffer> {
    let inner =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .build();
    let max_level = inner.filter();
    let buffer = LogBuffer::default();

    log::set_boxed_logger(Box::new(CapturingLogger::new(inner, buffer.clone())))?;
    log::set_max_level(max_level);

    Ok(buffer)
}
