//! Windows CRT backend.
//!
//! The CRT has no `localtime_r`; `_localtime64_s` is the reentrant
//! equivalent. `strftime` and `setlocale` come straight from the CRT. The
//! UTC breakdown is pure arithmetic from `epochfmt_core`; the CRT `tm` has
//! no zone fields, so `%Z` follows the CRT's global timezone name in both
//! modes, exactly as `_gmtime64_s`-based callers observe.

use std::ffi::{CStr, c_char, c_int};

use epochfmt_core::{CalendarTime, FormatError, Zone, epoch_to_calendar};

/// CRT `struct tm`: nine ints, no gmtoff/zone fields.
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub(crate) struct PlatformTm {
    tm_sec: c_int,
    tm_min: c_int,
    tm_hour: c_int,
    tm_mday: c_int,
    tm_mon: c_int,
    tm_year: c_int,
    tm_wday: c_int,
    tm_yday: c_int,
    tm_isdst: c_int,
}

/// CRT `LC_ALL`.
const LC_ALL: c_int = 0;

static DEFAULT_LOCALE: &CStr = c"";

unsafe extern "C" {
    fn _localtime64_s(tm: *mut PlatformTm, time: *const i64) -> c_int;
    fn strftime(
        buf: *mut c_char,
        maxsize: usize,
        format: *const c_char,
        tm: *const PlatformTm,
    ) -> usize;
    fn setlocale(category: c_int, locale: *const c_char) -> *mut c_char;
}

fn tm_from_calendar(cal: &CalendarTime) -> PlatformTm {
    PlatformTm {
        tm_sec: cal.second,
        tm_min: cal.minute,
        tm_hour: cal.hour,
        tm_mday: cal.day,
        tm_mon: cal.month,
        tm_year: cal.year,
        tm_wday: cal.weekday,
        tm_yday: cal.yearday,
        tm_isdst: 0,
    }
}

/// Break an epoch timestamp into calendar fields under the given zone rules.
pub(crate) fn calendar_breakdown(epoch: i64, zone: Zone) -> Result<PlatformTm, FormatError> {
    match zone {
        Zone::Utc => {
            let cal = epoch_to_calendar(epoch).ok_or(FormatError::ConversionFailure(epoch))?;
            Ok(tm_from_calendar(&cal))
        }
        Zone::Local => {
            let mut tm = PlatformTm::default();
            // SAFETY: both pointers reference live stack locals for the
            // duration of the call; `_localtime64_s` is reentrant.
            if unsafe { _localtime64_s(&mut tm, &epoch) } != 0 {
                return Err(FormatError::ConversionFailure(epoch));
            }
            Ok(tm)
        }
    }
}

/// Render `tm` into `out` with the CRT's locale-aware `strftime`.
pub(crate) fn render_into(
    tm: &PlatformTm,
    format: &CStr,
    out: &mut [u8],
) -> Result<usize, FormatError> {
    // SAFETY: `out` is valid for `out.len()` writable bytes, `format` is
    // NUL-terminated, and `tm` is fully initialized.
    let written = unsafe {
        strftime(
            out.as_mut_ptr().cast::<c_char>(),
            out.len(),
            format.as_ptr(),
            tm,
        )
    };
    if written == 0 {
        return Err(FormatError::FormattingOverflow {
            capacity: out.len(),
        });
    }
    Ok(written)
}

/// Activate the OS default locale as named by the environment.
pub(crate) fn activate_default_locale() {
    // SAFETY: the empty name is a valid NUL-terminated locale string; the
    // returned pointer is ignored, never dereferenced.
    unsafe { setlocale(LC_ALL, DEFAULT_LOCALE.as_ptr()) };
}
