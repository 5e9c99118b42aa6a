//! Stream-style message construction.
//!
//! A [`LogStream`] collects the text of one log call and hands it to its
//! facade when dropped. Whether it is active is decided once, at
//! construction, from the facade's minimum level; an inactive stream ignores
//! everything appended to it without formatting it.
//!
//! ```
//! use nodelog_core::{LogFacade, LogLevel};
//!
//! let facade = LogFacade::builder("arm").local_output(false).build();
//! facade.stream(LogLevel::Info).append("joint ").append(3).append(" homed");
//! assert_eq!(facade.next_seq(), 1);
//! ```

use crate::{LogFacade, LogLevel, SourceLocation};
use std::fmt::{self, Display, Write as _};

/// Accumulates one message; flushes to the facade on drop.
///
/// Not `Clone`: two copies would log twice. Moving a stream moves the
/// pending message with it, and only the final owner logs.
pub struct LogStream<'a> {
    facade: &'a LogFacade,
    level: LogLevel,
    location: Option<SourceLocation>,
    buf: String,
    active: bool,
}

impl<'a> LogStream<'a> {
    pub fn new(facade: &'a LogFacade, level: LogLevel, location: Option<SourceLocation>) -> Self {
        Self {
            facade,
            level,
            location,
            buf: String::new(),
            active: facade.enabled(level),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Text collected so far.
    pub fn text(&self) -> &str {
        &self.buf
    }

    /// Append `value` and return the stream, for chaining.
    pub fn append(mut self, value: impl Display) -> Self {
        self.push(value);
        self
    }

    /// Append `value` in place.
    pub fn push(&mut self, value: impl Display) {
        if self.active {
            // Writing into a String cannot fail.
            let _ = write!(self.buf, "{value}");
        }
    }
}

impl fmt::Write for LogStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.active {
            self.buf.push_str(s);
        }
        Ok(())
    }
}

impl Drop for LogStream<'_> {
    fn drop(&mut self) {
        if self.active && !self.buf.is_empty() {
            self.facade.log(self.level, &self.buf, self.location);
        }
    }
}

impl fmt::Debug for LogStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("level", &self.level)
            .field("active", &self.active)
            .field("buf", &self.buf)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
