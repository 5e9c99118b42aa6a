//! Channel transport — records flow to an async consumer.
//!
//! The sending half never blocks the logging thread (the channel is
//! unbounded). If the receiver has been dropped, records are discarded.

use nodelog_core::{LogRecord, Transport};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Create a transport and the receiver that yields its records, in sequence
/// order.
///
/// ```
/// use nodelog_core::LogFacade;
///
/// let (transport, mut rx) = nodelog_transport::channel();
/// let facade = LogFacade::builder("arm").local_output(false).transport(transport).build();
/// facade.info("homed");
/// assert_eq!(rx.try_recv().unwrap().message, "homed");
/// ```
pub fn channel() -> (Transport, mpsc::UnboundedReceiver<LogRecord>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let transport: Transport = Arc::new(move |record: &LogRecord| {
        let _ = tx.send(record.clone());
    });
    (transport, rx)
}
