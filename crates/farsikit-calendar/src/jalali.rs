//! Arithmetic Jalali calendar.
//!
//! Leap years follow Borkowski's break-year table: within each segment between two
//! break years the 33-year cycle applies, and the segments are chosen so the result
//! matches the astronomical calendar (vernal equinox at Tehran) for 1178..=1633 AP.

use farsikit_common::{Error, Result};

/// Years at which the leap cycle restarts. The last entry is the exclusive upper bound.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Where a Persian year sits in the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearInfo {
    /// Gregorian year in which the Persian year begins
    pub gregorian_year: i32,
    /// Day in March of that Gregorian year which is 1 Farvardin
    pub march_day: i32,
    /// Years since the last leap year; 0 means this year is itself a leap year
    pub leap_offset: i32,
}

impl YearInfo {
    pub fn is_leap(&self) -> bool {
        self.leap_offset == 0
    }
}

/// Compute the calendar facts for Persian `year`.
pub fn year_info(year: i32) -> Result<YearInfo> {
    if !(BREAKS[0]..MAX_YEAR + 1).contains(&year) {
        return Err(Error::out_of_range("persian year", year));
    }

    let mut leap_count = -14;
    let mut segment_start = BREAKS[0];
    let mut jump = 0;

    for &next in &BREAKS[1..] {
        jump = next - segment_start;
        if year < next {
            break;
        }
        leap_count += jump / 33 * 8 + jump % 33 / 4;
        segment_start = next;
    }

    let mut n = year - segment_start;
    leap_count += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_count += 1;
    }

    let gregorian_year = year + 621;
    let gregorian_leaps = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_count - gregorian_leaps;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap_offset = ((n + 1) % 33 - 1) % 4;
    if leap_offset == -1 {
        leap_offset = 4;
    }

    Ok(YearInfo {
        gregorian_year,
        march_day,
        leap_offset,
    })
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 if year_info(year)?.is_leap() => Ok(30),
        12 => Ok(29),
        _ => Err(Error::out_of_range("month", month)),
    }
}

/// Days from 1 Farvardin to the given month and day, both 1-based.
pub fn day_of_year_offset(month: u8, day: u8) -> i32 {
    let month = i32::from(month);
    let day = i32::from(day);
    (month - 1) * 31 - (month / 7) * (month - 7) + day - 1
}

/// Split a zero-based offset from 1 Farvardin into a 1-based (month, day).
pub fn month_day_from_offset(offset: i32) -> (u8, u8) {
    let (month, day) = if offset <= 185 {
        (1 + offset / 31, offset % 31 + 1)
    } else {
        let rest = offset - 186;
        (7 + rest / 30, rest % 30 + 1)
    };

    // offsets are bounded by the year length, so both fit comfortably
    (month as u8, day as u8)
}
