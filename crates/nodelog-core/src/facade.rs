//! The logging facade: shared configuration plus dispatch.
//!
//! A [`LogFacade`] owns the minimum level, the two output switches, the
//! optional transport and the sequence counter. Everything except the node
//! name can change at runtime from any thread.
//!
//! # Locking
//!
//! All setters and the record-building half of [`LogFacade::log`] run under a
//! single mutex, which stays held while the console line is written and while
//! the transport runs. A slow transport therefore stalls every other thread
//! logging through the same facade. Records are never buffered to avoid this.
//!
//! The level check at the top of `log` reads an atomic copy of the minimum
//! level without taking the lock. It is a cheap pre-filter: a racing
//! [`set_min_level`](LogFacade::set_min_level) may or may not be observed by
//! a concurrent call.
//!
//! # Transport
//!
//! The transport is called synchronously, at most once per accepted call, with
//! the lock held. It must not log through the same facade (that deadlocks). A
//! panic inside it unwinds into the caller of `log`; the facade neither
//! catches nor retries.

use crate::console::{self, Palette};
use crate::{LogLevel, LogRecord, LogStream, SourceLocation, Stamp};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receives every record accepted for remote output.
pub type Transport = Arc<dyn Fn(&LogRecord) + Send + Sync>;

/// Destination for local console lines.
pub type ConsoleWriter = Box<dyn Write + Send>;

struct State {
    local_output: bool,
    remote_output: bool,
    transport: Option<Transport>,
    seq: u32,
    console: ConsoleWriter,
    palette: Palette,
}

/// Process- or component-wide logger. Share it behind an `Arc`, or use the
/// global one from [`registry`](crate::registry).
pub struct LogFacade {
    node_name: String,
    min_level: AtomicU8,
    state: Mutex<State>,
}

impl std::fmt::Debug for LogFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogFacade")
            .field("node_name", &self.node_name)
            .field("min_level", &self.min_level())
            .finish_non_exhaustive()
    }
}

impl LogFacade {
    /// Console-only facade that accepts every level.
    pub fn new(node_name: impl Into<String>) -> Self {
        Self::builder(node_name).build()
    }

    /// Facade forwarding every record to `transport` as well as the console.
    pub fn with_transport(node_name: impl Into<String>, transport: Transport) -> Self {
        Self::builder(node_name).transport(transport).build()
    }

    pub fn builder(node_name: impl Into<String>) -> FacadeBuilder {
        FacadeBuilder::new(node_name.into())
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    pub fn set_min_level(&self, level: LogLevel) {
        let _state = self.lock();
        self.min_level.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn min_level(&self) -> LogLevel {
        // Only ever stored from a valid `LogLevel`.
        LogLevel::from_ordinal(self.min_level.load(Ordering::Relaxed)).unwrap_or(LogLevel::Debug)
    }

    /// Cheap level check, as done at the top of [`log`](Self::log).
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.ordinal() >= self.min_level.load(Ordering::Relaxed)
    }

    pub fn set_local_output(&self, enabled: bool) {
        self.lock().local_output = enabled;
    }

    pub fn local_output(&self) -> bool {
        self.lock().local_output
    }

    pub fn set_remote_output(&self, enabled: bool) {
        self.lock().remote_output = enabled;
    }

    pub fn remote_output(&self) -> bool {
        self.lock().remote_output
    }

    /// Replace the transport. Remote output is switched on when a transport
    /// is installed and off when it is cleared; call
    /// [`set_remote_output`](Self::set_remote_output) afterwards to override.
    pub fn set_transport(&self, transport: Option<Transport>) {
        let mut state = self.lock();
        state.remote_output = transport.is_some();
        state.transport = transport;
    }

    pub fn has_transport(&self) -> bool {
        self.lock().transport.is_some()
    }

    /// Sequence number the next accepted record will carry.
    pub fn next_seq(&self) -> u32 {
        self.lock().seq
    }

    // -----------------------------------------------------------------------
    // Logging
    // -----------------------------------------------------------------------

    /// Emit one record. Calls below the minimum level return immediately.
    ///
    /// With a `location`, the message is prefixed with `"[file:line] "`.
    pub fn log(&self, level: LogLevel, message: &str, location: Option<SourceLocation>) {
        if !self.enabled(level) {
            return;
        }

        let mut state = self.lock();

        let message = match location {
            Some(loc) => loc.prefix(message),
            None => message.to_string(),
        };
        let record = LogRecord::new(Stamp::now(), state.seq, level, &self.node_name, message);
        state.seq = state.seq.wrapping_add(1);

        if state.local_output {
            let line = console::format_line(&record, &state.palette);
            // Best effort: a closed stderr must not take the caller down.
            let _ = writeln!(state.console, "{line}");
        }

        if state.remote_output {
            if let Some(transport) = &state.transport {
                transport(&record);
            }
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, None);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message, None);
    }

    /// Start a stream-style message without a source location.
    pub fn stream(&self, level: LogLevel) -> LogStream<'_> {
        LogStream::new(self, level, None)
    }

    /// Start a stream-style message tagged with `location`.
    pub fn stream_at(&self, level: LogLevel, location: SourceLocation) -> LogStream<'_> {
        LogStream::new(self, level, Some(location))
    }

    /// A transport that panicked while we held the lock poisons the mutex.
    /// The state itself is still consistent (the counter was already
    /// advanced), so keep going.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`LogFacade`]. Defaults: min level `Debug`, local output on,
/// remote output on iff a transport is given, console = stderr with the
/// default palette, sequence starting at 0.
pub struct FacadeBuilder {
    node_name: String,
    min_level: LogLevel,
    local_output: bool,
    remote_output: Option<bool>,
    transport: Option<Transport>,
    console: Option<ConsoleWriter>,
    palette: Palette,
    sequence_start: u32,
}

impl FacadeBuilder {
    fn new(node_name: String) -> Self {
        Self {
            node_name,
            min_level: LogLevel::Debug,
            local_output: true,
            remote_output: None,
            transport: None,
            console: None,
            palette: Palette::default(),
            sequence_start: 0,
        }
    }

    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn local_output(mut self, enabled: bool) -> Self {
        self.local_output = enabled;
        self
    }

    /// Force remote output on or off regardless of the transport.
    pub fn remote_output(mut self, enabled: bool) -> Self {
        self.remote_output = Some(enabled);
        self
    }

    pub fn transport(mut self, transport: Transport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Write console lines somewhere other than stderr.
    pub fn console(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(Box::new(writer));
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn sequence_start(mut self, seq: u32) -> Self {
        self.sequence_start = seq;
        self
    }

    pub fn build(self) -> LogFacade {
        let remote_output = self.remote_output.unwrap_or(self.transport.is_some());
        LogFacade {
            node_name: self.node_name,
            min_level: AtomicU8::new(self.min_level.ordinal()),
            state: Mutex::new(State {
                local_output: self.local_output,
                remote_output,
                transport: self.transport,
                seq: self.sequence_start,
                console: self.console.unwrap_or_else(|| Box::new(io::stderr())),
                palette: self.palette,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
