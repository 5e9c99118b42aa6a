//! Tracing bridge — re-emit records as `tracing` events.
//!
//! Lets a process that already runs a `tracing` subscriber collect nodelog
//! records alongside its other diagnostics. `tracing` has no fatal level, so
//! `Fatal` records are emitted at `ERROR` with `fatal = true`.

use crate::RecordSink;
use nodelog_core::{LogLevel, LogRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for TracingSink {
    fn publish(&self, record: &LogRecord) {
        let node = record.node_name.as_str();
        let seq = record.seq();
        let message = record.message.as_str();
        match record.level {
            LogLevel::Debug => tracing::debug!(node, seq, "{message}"),
            LogLevel::Info => tracing::info!(node, seq, "{message}"),
            LogLevel::Warn => tracing::warn!(node, seq, "{message}"),
            LogLevel::Error => tracing::error!(node, seq, "{message}"),
            LogLevel::Fatal => tracing::error!(node, seq, fatal = true, "{message}"),
        }
    }
}
