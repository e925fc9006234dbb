//! ABI layer for the formatting entrypoints.
//!
//! Pointer validation and the sentinel collapse happen here; everything
//! behind the boundary speaks `Result`.

use std::ffi::{CStr, c_char};

use epochfmt_core::Zone;

use crate::format;
use crate::locale;

// ---------------------------------------------------------------------------
// format_time
// ---------------------------------------------------------------------------

/// Format `epoch_seconds` into `out` using `format`'s `strftime` specifiers.
///
/// Writes at most `out_len` bytes including the NUL terminator. Returns the
/// formatted length (excluding the terminator) on success; returns `0` on
/// any failure: null `format` or `out`, non-positive `out_len`, a timestamp
/// the platform cannot break down, or output that does not fit. The buffer
/// contents are unspecified after a `0` return.
///
/// `use_local_time` selects the process timezone when nonzero, UTC
/// otherwise. The first call anywhere in the process activates the OS
/// default locale; activation is guarded, so concurrent first use is safe.
///
/// # Safety
///
/// `format` must point to a NUL-terminated string and `out` must be valid
/// for `out_len` writable bytes; neither is retained after the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn format_time(
    epoch_seconds: i64,
    format: *const c_char,
    out: *mut c_char,
    out_len: i32,
    use_local_time: i32,
) -> i32 {
    if format.is_null() || out.is_null() || out_len <= 0 {
        return 0;
    }

    // SAFETY: non-null and NUL-terminated per the contract above.
    let fmt = unsafe { CStr::from_ptr(format) };
    // SAFETY: non-null and valid for `out_len` bytes per the contract above.
    let buf = unsafe { std::slice::from_raw_parts_mut(out.cast::<u8>(), out_len as usize) };
    let zone = if use_local_time != 0 {
        Zone::Local
    } else {
        Zone::Utc
    };

    match format::format_epoch(epoch_seconds, fmt, zone, buf) {
        // `written < out_len` always holds, but the contract pins the
        // positive-i32 bound, so keep it explicit.
        Ok(written) if written <= i32::MAX as usize => written as i32,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// format_time_init_locale
// ---------------------------------------------------------------------------

/// Activate the OS default locale now instead of on the first format call.
///
/// Idempotent; hosts that prefer startup-time initialization under their own
/// control call this once, and later lazy activation becomes a no-op.
#[unsafe(no_mangle)]
pub extern "C" fn format_time_init_locale() {
    locale::ensure_activated();
}
