//! C ABI surface for locale-aware epoch time formatting.
//!
//! Platform call-through (`strftime`, `localtime_r`, `setlocale`) lives in
//! [`sys`]; pure arithmetic delegates to `epochfmt_core`. The exported
//! entrypoints are in [`format_abi`], and [`format`] is the same logic as a
//! safe Rust API.

pub mod format;
pub mod format_abi;
pub mod locale;
mod sys;
