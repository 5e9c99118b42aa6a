//! nodelog — process-wide structured logging facade.
//!
//! Re-exports the facade from [`nodelog_core`] and the transport adapters
//! from [`nodelog_transport`] so applications and integration tests can
//! depend on a single crate.
//!
//! # Quick start
//!
//! ```
//! use nodelog::{info, log_throttle, registry, LogLevel};
//!
//! registry::init("fpga_driver");
//! info!("link up after {} ms", 12);
//! for _ in 0..3 {
//!     log_throttle!(LogLevel::Warn, 1000, "fifo overrun");
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! macro ──► LogStream ──► LogFacade ──► stderr
//!                            │
//!                            └──► Transport (channel / JSON lines / tracing)
//! ```

pub use nodelog_core::*;

/// Transport adapters.
pub mod transport {
    pub use nodelog_transport::*;
}
