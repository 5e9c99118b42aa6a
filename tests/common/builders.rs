//! Test builders — facades wired to in-memory outputs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on poisoned locks rather than recovering.

use nodelog::{LogFacade, LogLevel, LogRecord, Palette, Transport};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// Captured outputs
// ---------------------------------------------------------------------------

/// Records delivered to a transport, in delivery order.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<LogRecord>>>);

impl Captured {
    pub fn transport(&self) -> Transport {
        let sink = Arc::clone(&self.0);
        Arc::new(move |record: &LogRecord| sink.lock().unwrap().push(record.clone()))
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn seqs(&self) -> Vec<u32> {
        self.records().iter().map(LogRecord::seq).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

/// Console writer backed by shared memory.
#[derive(Clone, Default)]
pub struct ConsoleBuffer(Arc<Mutex<Vec<u8>>>);

impl ConsoleBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Write for ConsoleBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TestFacade
// ---------------------------------------------------------------------------

/// A facade with both outputs captured.
pub struct TestFacade {
    pub facade: Arc<LogFacade>,
    pub console: ConsoleBuffer,
    pub captured: Captured,
}

impl TestFacade {
    /// Both outputs on, plain (uncoloured) console, every level accepted.
    pub fn new(node: &str) -> Self {
        Self::with_palette(node, Palette::plain())
    }

    pub fn with_palette(node: &str, palette: Palette) -> Self {
        let console = ConsoleBuffer::default();
        let captured = Captured::default();
        let facade = LogFacade::builder(node)
            .console(console.clone())
            .palette(palette)
            .transport(captured.transport())
            .build();
        Self {
            facade: Arc::new(facade),
            console,
            captured,
        }
    }

    pub fn min_level(self, level: LogLevel) -> Self {
        self.facade.set_min_level(level);
        self
    }
}
