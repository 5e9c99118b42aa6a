//! Suppression gates: once, every-N, on-change and throttle.
//!
//! Each gate is a small piece of state that decides, visit by visit, whether
//! a log call should go ahead. They are `const`-constructible so the
//! `log_once!`-style macros can give every call site its own `static` gate,
//! and they can equally be stored in a struct and reused by hand:
//!
//! ```
//! use nodelog_core::EveryN;
//!
//! struct Poller { progress: EveryN }
//!
//! let poller = Poller { progress: EveryN::new() };
//! let fired: Vec<bool> = (0..6).map(|_| poller.progress.should_log(3)).collect();
//! assert_eq!(fired, [false, false, true, false, false, true]);
//! ```
//!
//! # Concurrency
//!
//! Gates are shared by every thread reaching the same call site. All updates
//! are single atomic operations, so `Once` fires exactly once, `EveryN`
//! counts every visit, and of several threads racing past an expired
//! `Throttle` exactly one wins. Ordering between gate state and the log
//! output itself is not synchronised: two threads can still emit their
//! lines in either order.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Once
// ---------------------------------------------------------------------------

/// Fires on the first visit only.
#[derive(Debug, Default)]
pub struct Once {
    fired: AtomicBool,
}

impl Once {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    pub fn should_log(&self) -> bool {
        !self.fired.load(Ordering::Relaxed) && !self.fired.swap(true, Ordering::Relaxed)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// EveryN
// ---------------------------------------------------------------------------

/// Fires on visits `n`, `2n`, `3n`, ...
#[derive(Debug, Default)]
pub struct EveryN {
    count: AtomicU64,
}

impl EveryN {
    pub const fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    /// Count this visit. With `n == 0` the visit is counted but never fires.
    pub fn should_log(&self, n: u64) -> bool {
        let count = self.count.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        n != 0 && count % n == 0
    }

    /// Visits counted so far.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// OnChange
// ---------------------------------------------------------------------------

/// Fires when a condition goes from false to true. The previous value starts
/// out false, so a condition that is already true on the first visit fires.
#[derive(Debug, Default)]
pub struct OnChange {
    prev: AtomicBool,
}

impl OnChange {
    pub const fn new() -> Self {
        Self {
            prev: AtomicBool::new(false),
        }
    }

    pub fn should_log(&self, cond: bool) -> bool {
        let prev = self.prev.swap(cond, Ordering::Relaxed);
        cond && !prev
    }
}

// ---------------------------------------------------------------------------
// Throttle
// ---------------------------------------------------------------------------

const NEVER: i64 = i64::MIN;

/// Fires at most once per interval. The first visit always fires.
#[derive(Debug)]
pub struct Throttle {
    /// Nanoseconds since [`epoch`] of the last firing, or `NEVER`.
    last: AtomicI64,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new()
    }
}

impl Throttle {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(NEVER),
        }
    }

    pub fn should_log(&self, interval: Duration) -> bool {
        // The epoch must exist before the clock is read.
        epoch();
        self.should_log_at(interval, Instant::now())
    }

    /// As [`should_log`](Self::should_log), with an explicit clock reading.
    pub fn should_log_at(&self, interval: Duration, now: Instant) -> bool {
        let now = nanos_since_epoch(now);
        let interval = i64::try_from(interval.as_nanos()).unwrap_or(i64::MAX);
        let last = self.last.load(Ordering::Relaxed);
        if last != NEVER && now.saturating_sub(last) < interval {
            return false;
        }
        self.last
            .compare_exchange(last, now, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
    }
}

/// Process-wide reference point for throttle timestamps. `Instant` has no
/// const constructor, so statics store offsets from this instead.
fn epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    *EPOCH.get_or_init(Instant::now)
}

/// Signed whole nanoseconds from the epoch. No rounding happens on either
/// side of it, so the difference of two offsets is the exact gap.
fn nanos_since_epoch(t: Instant) -> i64 {
    let epoch = epoch();
    match t.checked_duration_since(epoch) {
        Some(d) => i64::try_from(d.as_nanos()).unwrap_or(i64::MAX),
        None => i64::try_from(epoch.duration_since(t).as_nanos()).map_or(NEVER + 1, |n| -n),
    }
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

/// Log only the first time this call site is reached.
///
/// ```
/// # use nodelog_core::{log_once, LogFacade, LogLevel};
/// # let facade = LogFacade::builder("n").local_output(false).build();
/// for _ in 0..10 {
///     log_once!(facade: facade, LogLevel::Warn, "calibration file missing, using defaults");
/// }
/// assert_eq!(facade.next_seq(), 1);
/// ```
#[macro_export]
macro_rules! log_once {
    (facade: $facade:expr, $level:expr, $($arg:tt)+) => {{
        static GATE: $crate::Once = $crate::Once::new();
        if GATE.should_log() {
            $crate::log_to!($facade, $level, $($arg)+);
        }
    }};
    ($level:expr, $($arg:tt)+) => {
        $crate::log_once!(facade: $crate::registry::instance(), $level, $($arg)+)
    };
}

/// Log on every `n`th visit to this call site (`n`, `2n`, ...).
#[macro_export]
macro_rules! log_every_n {
    (facade: $facade:expr, $level:expr, $n:expr, $($arg:tt)+) => {{
        static GATE: $crate::EveryN = $crate::EveryN::new();
        if GATE.should_log($n) {
            $crate::log_to!($facade, $level, $($arg)+);
        }
    }};
    ($level:expr, $n:expr, $($arg:tt)+) => {
        $crate::log_every_n!(facade: $crate::registry::instance(), $level, $n, $($arg)+)
    };
}

/// Log when `cond` turns true. `cond` is evaluated on every visit.
#[macro_export]
macro_rules! log_changed {
    (facade: $facade:expr, $level:expr, $cond:expr, $($arg:tt)+) => {{
        static GATE: $crate::OnChange = $crate::OnChange::new();
        if GATE.should_log($cond) {
            $crate::log_to!($facade, $level, $($arg)+);
        }
    }};
    ($level:expr, $cond:expr, $($arg:tt)+) => {
        $crate::log_changed!(facade: $crate::registry::instance(), $level, $cond, $($arg)+)
    };
}

/// Log at most once per `interval_ms` milliseconds from this call site.
#[macro_export]
macro_rules! log_throttle {
    (facade: $facade:expr, $level:expr, $interval_ms:expr, $($arg:tt)+) => {{
        static GATE: $crate::Throttle = $crate::Throttle::new();
        if GATE.should_log(::std::time::Duration::from_millis($interval_ms)) {
            $crate::log_to!($facade, $level, $($arg)+);
        }
    }};
    ($level:expr, $interval_ms:expr, $($arg:tt)+) => {
        $crate::log_throttle!(facade: $crate::registry::instance(), $level, $interval_ms, $($arg)+)
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
