//! POSIX backend.
//!
//! Local-time breakdown calls through to `localtime_r` because tzdata
//! interpretation belongs to the platform. The UTC breakdown is pure
//! arithmetic from `epochfmt_core`, with the zone fields pinned to GMT so
//! `%z`/`%Z` render the same way `gmtime_r` output would.

use std::ffi::{CStr, c_char};

use epochfmt_core::{CalendarTime, FormatError, Zone, epoch_to_calendar};

pub(crate) type PlatformTm = libc::tm;

static GMT_NAME: &CStr = c"GMT";
static DEFAULT_LOCALE: &CStr = c"";

fn tm_from_calendar(cal: &CalendarTime) -> libc::tm {
    // SAFETY: `libc::tm` is plain old data; every field we rely on is
    // assigned below.
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    tm.tm_sec = cal.second;
    tm.tm_min = cal.minute;
    tm.tm_hour = cal.hour;
    tm.tm_mday = cal.day;
    tm.tm_mon = cal.month;
    tm.tm_year = cal.year;
    tm.tm_wday = cal.weekday;
    tm.tm_yday = cal.yearday;
    tm.tm_isdst = 0;
    tm.tm_gmtoff = 0;
    tm.tm_zone = GMT_NAME.as_ptr();
    tm
}

/// Break an epoch timestamp into calendar fields under the given zone rules.
pub(crate) fn calendar_breakdown(epoch: i64, zone: Zone) -> Result<PlatformTm, FormatError> {
    match zone {
        Zone::Utc => {
            let cal = epoch_to_calendar(epoch).ok_or(FormatError::ConversionFailure(epoch))?;
            Ok(tm_from_calendar(&cal))
        }
        Zone::Local => {
            let t = libc::time_t::try_from(epoch)
                .map_err(|_| FormatError::ConversionFailure(epoch))?;
            // SAFETY: zero is a valid bit pattern for `libc::tm`; `localtime_r`
            // fills it before we read any field.
            let mut tm: libc::tm = unsafe { std::mem::zeroed() };
            // SAFETY: both pointers reference live stack locals for the
            // duration of the call; `localtime_r` is the reentrant variant.
            if unsafe { libc::localtime_r(&t, &mut tm) }.is_null() {
                return Err(FormatError::ConversionFailure(epoch));
            }
            Ok(tm)
        }
    }
}

/// Render `tm` into `out` with the platform's locale-aware `strftime`.
///
/// Writes at most `out.len()` bytes including the NUL terminator and returns
/// the formatted length excluding it. `strftime` reports overflow and an
/// empty expansion identically, so both surface as `FormattingOverflow`.
pub(crate) fn render_into(
    tm: &PlatformTm,
    format: &CStr,
    out: &mut [u8],
) -> Result<usize, FormatError> {
    // SAFETY: `out` is valid for `out.len()` writable bytes, `format` is
    // NUL-terminated, and `tm` is fully initialized.
    let written = unsafe {
        libc::strftime(
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
    unsafe { libc::setlocale(libc::LC_ALL, DEFAULT_LOCALE.as_ptr()) };
}
