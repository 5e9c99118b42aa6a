//! Process-wide facade used by the logging macros.
//!
//! Call [`init`] (or one of its variants) once at startup, before other code
//! logs. Each `init` builds a brand-new facade: levels, output switches and
//! the sequence counter of the previous one are gone, not merged.
//!
//! If nothing was initialised, [`instance`] falls back to a console-only
//! facade named `"default"` so early or stray log calls are never lost.
//! [`is_initialized`] tells the two situations apart.
//!
//! Handles returned by [`instance`] keep the facade they were taken from
//! alive; after a re-`init` they still point at the old one.

use crate::{LogFacade, LoggerConfig, Transport};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Node name of the fallback facade.
pub const DEFAULT_NODE_NAME: &str = "default";

static GLOBAL: RwLock<Option<Arc<LogFacade>>> = RwLock::new(None);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Replace the global facade with a console-only one for `node_name`.
pub fn init(node_name: impl Into<String>) {
    install(LogFacade::new(node_name));
}

/// Replace the global facade with one that also forwards every record to
/// `transport`.
pub fn init_with_transport(node_name: impl Into<String>, transport: Transport) {
    install(LogFacade::with_transport(node_name, transport));
}

/// Replace the global facade with one built from `config`, plus an optional
/// transport.
pub fn init_from_config(config: &LoggerConfig, transport: Option<Transport>) {
    let builder = config.builder();
    let builder = match transport {
        Some(transport) => builder.transport(transport),
        None => builder,
    };
    install(builder.build());
}

/// Install a fully built facade.
pub fn install(facade: LogFacade) {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(facade));
    INITIALIZED.store(true, Ordering::SeqCst);
}

/// The current global facade, creating the fallback on first use.
pub fn instance() -> Arc<LogFacade> {
    if let Some(facade) = GLOBAL.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Arc::clone(facade);
    }
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have filled the slot between the two locks.
    Arc::clone(slot.get_or_insert_with(|| Arc::new(LogFacade::new(DEFAULT_NODE_NAME))))
}

/// True once [`init`] (or a variant) has run, false for the fallback.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Drop the global facade and forget that it was initialised. The next
/// [`instance`] call builds a fresh fallback.
pub fn reset() {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
    INITIALIZED.store(false, Ordering::SeqCst);
}
