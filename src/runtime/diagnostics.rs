use std::sync::atomic::{AtomicBool, Ordering};

// Defaults to on for debug builds, off for release builds.
static DIAGNOSTICS: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Enable or disable developer diagnostics process-wide.
///
/// Diagnostics gate the warning emitted when an accessor is read with no
/// enclosing provider. They never change what a read returns, only what
/// is logged. The default follows the build profile (`debug_assertions`);
/// call this once at startup to override it.
///
/// # Examples
///
/// ```
/// partyline::set_diagnostics(false);
/// ```
pub fn set_diagnostics(enabled: bool) {
    DIAGNOSTICS.store(enabled, Ordering::SeqCst);
}

/// Whether the missing-provider warning is currently enabled.
pub(crate) fn diagnostics_enabled() -> bool {
    DIAGNOSTICS.load(Ordering::SeqCst)
}
