//! Level logging macros.
//!
//! Every macro attaches the call-site [`SourceLocation`](crate::SourceLocation)
//! and only formats its arguments when the level passes the facade's filter.
//! Without an explicit facade they log through
//! [`registry::instance`](crate::registry::instance).
//!
//! ```
//! use nodelog_core::{info, log_to, LogFacade, LogLevel};
//!
//! nodelog_core::registry::init("fpga_driver");
//! info!("temperature: {} C", 41.5);
//!
//! let local = LogFacade::builder("bench").local_output(false).build();
//! log_to!(local, LogLevel::Debug, "step {}", 1);
//! assert_eq!(local.next_seq(), 1);
//! ```

/// Log through an explicit facade (`LogFacade`, `&LogFacade` or
/// `Arc<LogFacade>`).
#[macro_export]
macro_rules! log_to {
    ($facade:expr, $level:expr, $($arg:tt)+) => {{
        let facade: &$crate::LogFacade = &$facade;
        let mut stream = $crate::LogStream::new(
            facade,
            $level,
            ::core::option::Option::Some($crate::location!()),
        );
        if stream.is_active() {
            let _ = ::core::fmt::Write::write_fmt(&mut stream, ::core::format_args!($($arg)+));
        }
    }};
}

/// Log through the global facade at `level`.
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log_to!($crate::registry::instance(), $level, $($arg)+)
    };
}

/// Log only when `cond` holds. `cond` is evaluated first; the message only
/// when it is true.
#[macro_export]
macro_rules! log_if {
    (facade: $facade:expr, $cond:expr, $level:expr, $($arg:tt)+) => {
        if $cond {
            $crate::log_to!($facade, $level, $($arg)+);
        }
    };
    ($cond:expr, $level:expr, $($arg:tt)+) => {
        if $cond {
            $crate::log!($level, $($arg)+);
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::Error, $($arg)+) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::Fatal, $($arg)+) };
}
