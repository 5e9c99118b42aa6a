#![allow(unused)]
//! Transport adapter integration harness.
//!
//! # What this covers
//!
//! - **Channel transport**: records logged from several threads reach an
//!   async consumer exactly once, in sequence order.
//! - **JSON lines**: every accepted record becomes one line whose shape is
//!   `{header:{stamp,seq,frame_id}, level:<ordinal>, node_name, message}`.
//! - **Fan-out**: one facade feeding several sinks delivers identical records
//!   to each.
//! - **Tracing bridge**: records re-emitted as `tracing` events keep their
//!   message, and `Fatal` is marked with `fatal=true`.
//!
//! # Running
//!
//! ```sh
//! cargo test --test transport_harness
//! ```

mod common;
use common::*;
use nodelog::transport::{channel, fan_out, into_transport, JsonLinesSink, RecordSink, TracingSink};
use nodelog::{LogFacade, LogLevel, LogRecord};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

/// JSON lines sink whose output can be read back while the facade lives.
#[derive(Clone, Default)]
struct SharedJson(Arc<Mutex<Vec<u8>>>);

impl SharedJson {
    fn values(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

impl std::io::Write for SharedJson {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn channel_delivers_every_record_in_order() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 100;

    let (transport, mut rx) = channel();
    let facade = Arc::new(
        LogFacade::builder(NODE)
            .local_output(false)
            .transport(transport)
            .build(),
    );

    let producers: Vec<_> = (0..THREADS)
        .map(|id| {
            let facade = Arc::clone(&facade);
            std::thread::spawn(move || {
                for i in 0..PER_THREAD {
                    facade.log(LogLevel::Info, &format!("t{id} #{i}"), None);
                }
            })
        })
        .collect();
    for p in producers {
        p.join().unwrap();
    }
    drop(facade);

    let mut records = Vec::new();
    while let Some(record) = rx.recv().await {
        records.push(record);
    }
    assert_eq!(records.len(), THREADS * PER_THREAD);
    assert_consecutive!(records, 0);
}

#[tokio::test]
async fn channel_consumer_task_sees_live_records() {
    let (transport, mut rx) = channel();
    let consumer = tokio::spawn(async move {
        let mut messages = Vec::new();
        while let Some(record) = rx.recv().await {
            messages.push(record.message);
        }
        messages
    });

    let facade = LogFacade::builder(NODE).local_output(false).transport(transport).build();
    for message in SENSOR_MESSAGES {
        facade.info(message);
    }
    drop(facade);

    assert_eq!(consumer.await.unwrap(), SENSOR_MESSAGES);
}

// ---------------------------------------------------------------------------
// JSON lines
// ---------------------------------------------------------------------------

#[test]
fn json_lines_wire_shape() {
    let out = SharedJson::default();
    let facade = LogFacade::builder(NODE)
        .local_output(false)
        .transport(into_transport(JsonLinesSink::new(out.clone())))
        .sequence_start(41)
        .build();
    facade.warn("overtemp");
    facade.debug("fan 80%");

    let values = out.values();
    assert_eq!(values.len(), 2);

    let first = &values[0];
    assert_eq!(first["header"]["seq"], 41);
    assert_eq!(first["header"]["frame_id"], NODE);
    assert!(first["header"]["stamp"]["sec"].as_i64().unwrap() > 0);
    assert!(first["header"]["stamp"]["usec"].as_u64().unwrap() < 1_000_000);
    assert_eq!(first["level"], 2);
    assert_eq!(first["node_name"], NODE);
    assert_eq!(first["message"], "overtemp");

    assert_eq!(values[1]["header"]["seq"], 42);
    assert_eq!(values[1]["level"], 0);
}

#[test]
fn json_lines_parse_back_into_records() {
    let out = SharedJson::default();
    let captured = Captured::default();
    let facade = LogFacade::builder(NODE)
        .local_output(false)
        .transport(fan_out(vec![
            into_transport(JsonLinesSink::new(out.clone())),
            captured.transport(),
        ]))
        .build();
    for level in LogLevel::ALL {
        facade.log(level, level.as_str(), None);
    }

    let bytes = out.0.lock().unwrap().clone();
    let parsed: Vec<LogRecord> = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(parsed, captured.records());
}

// ---------------------------------------------------------------------------
// Fan-out
// ---------------------------------------------------------------------------

#[test]
fn fan_out_feeds_every_sink_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let tagged = |tag: &'static str| {
        let order = Arc::clone(&order);
        Arc::new(move |record: &LogRecord| order.lock().unwrap().push((tag, record.seq())))
            as nodelog::Transport
    };
    let facade = LogFacade::builder(NODE)
        .local_output(false)
        .transport(fan_out(vec![tagged("a"), tagged("b")]))
        .build();
    facade.info("x");
    facade.info("y");
    assert_eq!(*order.lock().unwrap(), [("a", 0), ("b", 0), ("a", 1), ("b", 1)]);
}

#[test]
fn custom_sink_through_trait() {
    #[derive(Clone, Default)]
    struct Errors(Arc<Mutex<Vec<String>>>);

    impl RecordSink for Errors {
        fn publish(&self, record: &LogRecord) {
            if record.level >= LogLevel::Error {
                self.0.lock().unwrap().push(record.message.clone());
            }
        }
    }

    let errors = Errors::default();
    let facade = LogFacade::builder(OTHER_NODE)
        .local_output(false)
        .transport(into_transport(errors.clone()))
        .build();
    facade.warn("stall warning");
    facade.error("stall");
    facade.fatal("driver fault");
    assert_eq!(*errors.0.lock().unwrap(), ["stall", "driver fault"]);
}

// ---------------------------------------------------------------------------
// Tracing bridge
// ---------------------------------------------------------------------------

#[test]
fn tracing_bridge_reemits_records() {
    let buffer = ConsoleBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let facade = LogFacade::builder(NODE)
            .local_output(false)
            .transport(into_transport(TracingSink::new()))
            .build();
        facade.info("link up");
        facade.fatal("bus off");
    });

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2, "{lines:#?}");
    assert!(lines[0].contains("INFO") && lines[0].contains("link up"), "{}", lines[0]);
    assert!(lines[1].contains("ERROR"), "{}", lines[1]);
    assert!(lines[1].contains("fatal=true"), "{}", lines[1]);
    assert!(lines[1].contains("bus off"), "{}", lines[1]);
}
