//! Pure logic for epoch time formatting.
//!
//! This crate owns the arithmetic and the error taxonomy; nothing here is
//! `unsafe` and nothing touches libc. Platform call-through (timezone rules,
//! locale activation, `strftime` rendering) lives in `epochfmt-abi`.

pub mod calendar;
pub mod error;

pub use calendar::{CalendarTime, Zone, epoch_to_calendar};
pub use error::{FormatError, Result};
