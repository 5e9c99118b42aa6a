//! nodelog-core — leveled, sequenced logging facade.
//!
//! Callers build messages with a [`LogStream`] (usually through the
//! [`info!`]-style macros); the [`LogFacade`] filters them by level, stamps
//! them into a [`LogRecord`], prints them on stderr and hands them to an
//! optional transport.
//!
//! # Architecture
//!
//! ```text
//! macro ──► LogStream ──drop──► LogFacade::log ──► console (stderr)
//!   │                              │
//!   └─ suppression gate            └──► Transport callback
//! ```
//!
//! Dispatch is synchronous: nothing is queued, and the facade lock is held
//! for the console write and the transport call. The global facade lives in
//! [`registry`].

pub mod config;
pub mod console;
pub mod facade;
pub mod level;
mod macros;
pub mod record;
pub mod registry;
pub mod stream;
pub mod suppress;

pub use config::LoggerConfig;
pub use console::Palette;
pub use facade::{FacadeBuilder, LogFacade, Transport};
pub use level::{level_name, LogLevel, ParseLevelError};
pub use record::{LogRecord, RecordHeader, SourceLocation, Stamp};
pub use stream::LogStream;
pub use suppress::{EveryN, Once, OnChange, Throttle};
