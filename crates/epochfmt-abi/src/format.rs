//! Safe formatting path beneath the C shim.

use std::ffi::CStr;

use epochfmt_core::{FormatError, Result, Zone};

use crate::locale;
use crate::sys;

/// Format `epoch` into `out` using the platform's locale-aware renderer.
///
/// Activates the OS default locale on the first call anywhere in the
/// process, breaks the timestamp down under `zone` rules, and renders it
/// with `format`'s `strftime` specifiers. Returns the number of bytes
/// written, excluding the NUL terminator; `out` holds valid formatted text
/// up to that length and nothing beyond it is meaningful.
///
/// `out` must have room for the rendered text plus the terminator; anything
/// less is a [`FormatError::FormattingOverflow`].
pub fn format_epoch(epoch: i64, format: &CStr, zone: Zone, out: &mut [u8]) -> Result<usize> {
    if out.is_empty() {
        return Err(FormatError::InvalidArgument("output buffer is empty"));
    }
    locale::ensure_activated();
    let tm = sys::calendar_breakdown(epoch, zone)?;
    sys::render_into(&tm, format, out)
}
