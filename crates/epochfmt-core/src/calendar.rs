//! Calendar decomposition of epoch timestamps.
//!
//! Implements the UTC breakdown in pure arithmetic so the UTC path never
//! depends on platform tables. Local-time breakdown needs tzdata and stays
//! in the ABI crate's platform layer.

/// Which timezone rules interpret a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Coordinated Universal Time.
    Utc,
    /// The process's local timezone rules.
    Local,
}

/// Broken-down calendar instant, field conventions matching C `struct tm`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarTime {
    /// Seconds (0-60, 60 for leap second).
    pub second: i32,
    /// Minutes (0-59).
    pub minute: i32,
    /// Hours (0-23).
    pub hour: i32,
    /// Day of month (1-31).
    pub day: i32,
    /// Month (0-11, January = 0).
    pub month: i32,
    /// Years since 1900.
    pub year: i32,
    /// Day of week (0-6, Sunday = 0).
    pub weekday: i32,
    /// Day of year (0-365).
    pub yearday: i32,
}

/// Returns `true` for Gregorian leap years.
#[inline]
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days before the first of each month in a non-leap year.
const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert seconds since the Unix epoch to a broken-down UTC instant.
///
/// Uses the 400-year-era civil-date algorithm rather than a year-walking
/// loop, so cost is flat across the whole `i64` range. Negative epochs
/// (pre-1970) are handled. Returns `None` when the resulting year does not
/// fit the `struct tm` year field, matching the platform converters that
/// reject such timestamps.
pub fn epoch_to_calendar(epoch_secs: i64) -> Option<CalendarTime> {
    let days = epoch_secs.div_euclid(86_400);
    let secs_of_day = epoch_secs.rem_euclid(86_400);

    let second = (secs_of_day % 60) as i32;
    let minute = ((secs_of_day / 60) % 60) as i32;
    let hour = (secs_of_day / 3_600) as i32;

    // 1970-01-01 was a Thursday.
    let weekday = (days + 4).rem_euclid(7) as i32;

    // Shift day zero to 0000-03-01 and split into 146097-day eras, so leap
    // days land at era boundaries.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z - era * 146_097; // [0, 146096]
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153; // [0, 11], March = 0
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as i32;
    let month = if shifted_month < 10 {
        (shifted_month + 2) as i32 // March..December
    } else {
        (shifted_month - 10) as i32 // January, February
    };
    let mut civil_year = era * 400 + year_of_era;
    if month < 2 {
        civil_year += 1;
    }

    let year = i32::try_from(civil_year - 1_900).ok()?;

    let mut yearday = DAYS_BEFORE_MONTH[month as usize] + day - 1;
    if month > 1 && is_leap_year(civil_year) {
        yearday += 1;
    }

    Some(CalendarTime {
        second,
        minute,
        hour,
        day,
        month,
        year,
        weekday,
        yearday,
    })
}
