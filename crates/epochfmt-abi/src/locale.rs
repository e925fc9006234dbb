//! Process-wide locale activation.
//!
//! The OS default locale must be active before the first locale-aware
//! render. A `Once` makes concurrent first use race-free; the source
//! contract only promised single-threaded first use, so this is strictly
//! stronger. Repeated activation is a no-op and the locale is never torn
//! down for the life of the process.

use std::sync::Once;

use crate::sys;

static ACTIVATE: Once = Once::new();

/// Activate the OS default locale exactly once per process.
///
/// Safe to call from any number of threads; every caller returns only after
/// activation has completed somewhere.
pub fn ensure_activated() {
    ACTIVATE.call_once(sys::activate_default_locale);
}
