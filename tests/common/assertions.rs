//! Domain-specific assertion macros for nodelog harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! logging invariant was violated.

/// Assert that records carry consecutive sequence numbers starting at `start`.
///
/// ```rust
/// assert_consecutive!(captured.records(), 0);
/// ```
#[macro_export]
macro_rules! assert_consecutive {
    ($records:expr, $start:expr) => {{
        let records: &[nodelog::LogRecord] = &$records;
        let mut expected: u32 = $start;
        for (i, record) in records.iter().enumerate() {
            if record.seq() != expected {
                panic!(
                    "assert_consecutive! failed at index {}:\n  expected seq: {}\n  actual seq:   {}\n  message: {:?}",
                    i,
                    expected,
                    record.seq(),
                    record.message
                );
            }
            expected = expected.wrapping_add(1);
        }
    }};
}

/// Assert that a console line has the `[time] [LEVEL] [node] message` shape
/// for the given level, node and message (plain palette).
///
/// ```rust
/// assert_console_line!(line, LogLevel::Info, "imu", "ready");
/// ```
#[macro_export]
macro_rules! assert_console_line {
    ($line:expr, $level:expr, $node:expr, $message:expr) => {{
        let line: &str = &$line;
        let tail = format!("] [{:<5}] [{}] {}", $level, $node, $message);
        if !line.ends_with(&tail) {
            panic!(
                "assert_console_line! failed:\n  expected suffix: {:?}\n  actual line:     {:?}",
                tail, line
            );
        }
        let bytes = line.as_bytes();
        // "[HH:MM:SS.UUUUUU]"
        let stamp_ok = bytes.len() > 17
            && bytes[0] == b'['
            && bytes[3] == b':'
            && bytes[6] == b':'
            && bytes[9] == b'.'
            && bytes[16] == b']'
            && line[10..16].bytes().all(|b| b.is_ascii_digit());
        if !stamp_ok {
            panic!("assert_console_line! failed: bad timestamp prefix in {:?}", line);
        }
    }};
}
