//! JSON lines sink.
//!
//! Each record becomes one line holding the record's wire shape:
//!
//! ```text
//! {"header":{"stamp":{"sec":..,"usec":..},"seq":7,"frame_id":"node"},"level":1,"node_name":"node","message":"..."}
//! ```
//!
//! Write or encoding failures are reported through `tracing` and the record
//! is dropped; the logging call that produced it is not affected.

use crate::RecordSink;
use nodelog_core::LogRecord;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send + 'static> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect an in-memory buffer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send + 'static> RecordSink for JsonLinesSink<W> {
    fn publish(&self, record: &LogRecord) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = serde_json::to_writer(&mut *writer, record)
            .map_err(std::io::Error::from)
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush());
        if let Err(err) = result {
            tracing::warn!(seq = record.seq(), error = %err, "json sink dropped a record");
        }
    }
}
