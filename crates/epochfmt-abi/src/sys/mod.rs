//! Platform calendar and locale capability.
//!
//! One uniform API, implementation selected at build time. Both backends
//! provide reentrant calendar breakdown, the platform's locale-aware
//! `strftime`, and default-locale activation.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::{activate_default_locale, calendar_breakdown, render_into};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::{activate_default_locale, calendar_breakdown, render_into};
