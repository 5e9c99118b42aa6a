//! nodelog-transport — adapters that deliver records beyond the console.
//!
//! A facade's transport is just `Arc<dyn Fn(&LogRecord) + Send + Sync>`.
//! This crate provides the [`RecordSink`] trait as a named seam for that
//! callback, plus ready-made sinks:
//!
//! - [`channel`]: hand records to an async consumer over a tokio channel;
//! - [`JsonLinesSink`]: write one JSON object per record to any writer;
//! - [`TracingSink`]: re-emit records as `tracing` events.
//!
//! Sinks run on the logging thread with the facade lock held, so they should
//! be quick. Failures are the sink's own business: none of these sinks ever
//! panics or reports back to the facade.

pub mod channel;
pub mod json;
pub mod tracing_bridge;

use nodelog_core::{LogRecord, Transport};
use std::sync::Arc;

pub use channel::channel;
pub use json::JsonLinesSink;
pub use tracing_bridge::TracingSink;

/// Something that accepts log records for delivery elsewhere.
pub trait RecordSink: Send + Sync + 'static {
    fn publish(&self, record: &LogRecord);
}

/// Wrap a sink as a facade transport.
pub fn into_transport<S: RecordSink>(sink: S) -> Transport {
    Arc::new(move |record: &LogRecord| sink.publish(record))
}

/// Fan a record out to several transports in order.
pub fn fan_out(transports: Vec<Transport>) -> Transport {
    Arc::new(move |record: &LogRecord| {
        for transport in &transports {
            transport(record);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodelog_core::{LogFacade, LogLevel};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(Arc<AtomicUsize>);

    impl RecordSink for Counter {
        fn publish(&self, _record: &LogRecord) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn sink_as_transport() {
        let count = Arc::new(AtomicUsize::new(0));
        let facade = LogFacade::builder("n")
            .local_output(false)
            .transport(into_transport(Counter(Arc::clone(&count))))
            .build();
        facade.info("one");
        facade.log(LogLevel::Error, "two", None);
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn fan_out_reaches_every_transport() {
        let a = Arc::new(AtomicUsize::new(0));
        let b = Arc::new(AtomicUsize::new(0));
        let transport = fan_out(vec![
            into_transport(Counter(Arc::clone(&a))),
            into_transport(Counter(Arc::clone(&b))),
        ]);
        let facade = LogFacade::builder("n").local_output(false).transport(transport).build();
        facade.warn("x");
        assert_eq!((a.load(Ordering::Relaxed), b.load(Ordering::Relaxed)), (1, 1));
    }
}
