//! The structured unit produced by every accepted log call.
//!
//! A [`LogRecord`] is built by [`LogFacade::log`](crate::LogFacade::log) under
//! the facade lock, handed to the console formatter and the transport, and
//! then dropped. Nothing keeps a history of records.

use crate::LogLevel;
use serde::{Deserialize, Serialize};

/// Wall-clock timestamp split into whole seconds and microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Stamp {
    /// Seconds since the Unix epoch.
    pub sec: i64,
    /// Sub-second part, `0..1_000_000`.
    pub usec: u32,
}

impl Stamp {
    pub fn now() -> Self {
        let now = chrono::Utc::now();
        Self {
            sec: now.timestamp(),
            // Leap seconds report >= 1_000_000; fold them into the last microsecond.
            usec: now.timestamp_subsec_micros().min(999_999),
        }
    }
}

/// Record header: when, in which order, and from which node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordHeader {
    pub stamp: Stamp,
    /// Per-facade sequence number. Wraps at `u32::MAX`.
    pub seq: u32,
    /// Always equal to the node name; kept for consumers that still read it.
    pub frame_id: String,
}

/// One timestamped, sequenced log message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub header: RecordHeader,
    /// Encoded on the wire as the level ordinal.
    #[serde(with = "level_ordinal")]
    pub level: LogLevel,
    pub node_name: String,
    /// Final message text, including any `[file:line] ` prefix.
    pub message: String,
}

impl LogRecord {
    pub fn new(stamp: Stamp, seq: u32, level: LogLevel, node_name: &str, message: String) -> Self {
        Self {
            header: RecordHeader {
                stamp,
                seq,
                frame_id: node_name.to_string(),
            },
            level,
            node_name: node_name.to_string(),
            message,
        }
    }

    pub fn seq(&self) -> u32 {
        self.header.seq
    }

    pub fn stamp(&self) -> Stamp {
        self.header.stamp
    }
}

mod level_ordinal {
    use crate::LogLevel;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(level: &LogLevel, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(level.ordinal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<LogLevel, D::Error> {
        let ordinal = u8::deserialize(d)?;
        LogLevel::from_ordinal(ordinal)
            .ok_or_else(|| de::Error::custom(format!("invalid log level ordinal {ordinal}")))
    }
}

// ---------------------------------------------------------------------------
// Source location
// ---------------------------------------------------------------------------

/// Call-site file and line, attached by the logging macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Final path component of `file`. Both `/` and `\` count as separators
    /// so paths from Windows builds shorten the same way.
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// `"[file_name:line] " + message`.
    pub fn prefix(&self, message: &str) -> String {
        format!("[{}:{}] {}", self.file_name(), self.line, message)
    }
}

/// Expands to the [`SourceLocation`] of the invocation site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::SourceLocation::new(::core::file!(), ::core::line!())
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
