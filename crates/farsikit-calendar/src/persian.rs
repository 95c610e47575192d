//! Persian (Jalali) calendar dates, conversion to and from Gregorian civil dates, and
//! the Persian date layouts.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use farsikit_common::{Error, Result};
use jiff::ToSpan;
use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::format::squash;
use crate::jalali::{self, MAX_YEAR, MIN_YEAR, YearInfo};

/// The twelve Persian month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Name of the 1-based Persian `month`.
pub fn month_name(month: u8) -> Result<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(usize::from(index)))
        .copied()
        .ok_or_else(|| Error::out_of_range("month", month))
}

/// Whether the Persian `year` has 366 days.
pub fn is_leap_year(year: i32) -> Result<bool> {
    check_year(year)?;
    Ok(jalali::year_info(year)?.is_leap())
}

/// Number of days in the 1-based `month` of the Persian `year`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    check_year(year)?;
    jalali::days_in_month(year, month)
}

/// A valid date of the Persian solar calendar.
///
/// Serializes as its `yyyy/MM/dd` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PersianDate {
    /// Build a date, checking the year, month and day against the calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::out_of_range("month", month));
        }
        if day == 0 || day > jalali::days_in_month(year, month)? {
            return Err(Error::out_of_range("day", day));
        }

        Ok(Self { year, month, day })
    }

    /// The Persian date falling on the Gregorian `date`.
    pub fn from_gregorian(date: Date) -> Result<Self> {
        let gregorian_year = i32::from(date.year());
        let out_of_range = || Error::out_of_range("gregorian year", gregorian_year);

        // the last supported Persian year runs into the following Gregorian year, which has
        // no Nowruz of its own within the table
        let mut year = (gregorian_year - 621).min(MAX_YEAR);
        let mut start = nowruz(&jalali::year_info(year)?)?;
        if date < start {
            // before 1 Farvardin: the tail of the previous Persian year
            year -= 1;
            check_year(year)?;
            start = nowruz(&jalali::year_info(year)?)?;
        }

        let offset = start.until(date).map_err(|_| out_of_range())?.get_days();
        let year_length = jalali::day_of_year_offset(12, jalali::days_in_month(year, 12)?) + 1;
        if offset >= year_length {
            return Err(out_of_range());
        }

        check_year(year)?;
        let (month, day) = jalali::month_day_from_offset(offset);
        trace!("gregorian {date} is persian {year}/{month}/{day}");

        Ok(Self { year, month, day })
    }

    /// The Gregorian date this Persian date falls on.
    pub fn to_gregorian(&self) -> Result<Date> {
        let info = jalali::year_info(self.year)?;
        let offset = jalali::day_of_year_offset(self.month, self.day);

        nowruz(&info)?
            .checked_add(offset.days())
            .map_err(|_| Error::out_of_range("persian year", self.year))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month_name(&self) -> &'static str {
        // month is validated on construction
        MONTH_NAMES[usize::from(self.month - 1)]
    }

    pub fn is_leap_year(&self) -> bool {
        jalali::year_info(self.year).is_ok_and(|info| info.is_leap())
    }
}

/// Zero padded `yyyy/MM/dd`
impl Display for PersianDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Parses `year/month/day`. Components may be unpadded and surrounded by whitespace.
impl FromStr for PersianDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::Empty("persian date"));
        }

        let parts: Vec<&str> = s.split('/').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(Error::WrongComponentCount(parts.len()));
        };

        let year = parse_component(year)?;
        let month = parse_component(month)?;
        let day = parse_component(day)?;

        Self::new(
            i32::try_from(year).map_err(|_| Error::out_of_range("persian year", year))?,
            u8::try_from(month).map_err(|_| Error::out_of_range("month", month))?,
            u8::try_from(day).map_err(|_| Error::out_of_range("day", day))?,
        )
    }
}

impl TryFrom<String> for PersianDate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PersianDate> for String {
    fn from(value: PersianDate) -> Self {
        value.to_string()
    }
}

/// A Persian date with the hour and minute of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersianDateTime {
    date: PersianDate,
    hour: i8,
    minute: i8,
}

impl PersianDateTime {
    pub fn from_gregorian(date_time: DateTime) -> Result<Self> {
        Ok(Self {
            date: PersianDate::from_gregorian(date_time.date())?,
            hour: date_time.hour(),
            minute: date_time.minute(),
        })
    }

    pub fn date(&self) -> PersianDate {
        self.date
    }

    pub fn hour(&self) -> i8 {
        self.hour
    }

    pub fn minute(&self) -> i8 {
        self.minute
    }
}

/// Zero padded `yyyy/MM/dd HH:mm`
impl Display for PersianDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:{:02}", self.date, self.hour, self.minute)
    }
}

/// Output layout for [`to_persian_date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersianFormat {
    /// `yyyy/MM/dd`
    #[default]
    SimpleDate,
    /// `{day} {month name} {year}`, e.g. `22 بهمن 1357`
    LongDate,
    /// `yyyy/MM/dd HH:mm`
    DateTime,
}

impl PersianFormat {
    /// Look up a format by name, ignoring case and separators. Unknown names fall back to
    /// [`PersianFormat::SimpleDate`].
    pub fn from_name(name: &str) -> Self {
        match squash(name).as_str() {
            "long" | "longdate" => PersianFormat::LongDate,
            "datetime" => PersianFormat::DateTime,
            _ => PersianFormat::SimpleDate,
        }
    }
}

/// Parse a Persian `yyyy/MM/dd` date and return the Gregorian date at midnight.
pub fn persian_to_gregorian(persian_date: &str) -> Result<DateTime> {
    let date: PersianDate = persian_date.parse().inspect_err(|e| {
        debug!("rejected persian date '{persian_date}': {e}");
    })?;

    Ok(date.to_gregorian()?.to_datetime(jiff::civil::Time::midnight()))
}

/// Render the Gregorian `date` in the Persian calendar using `flag`'s layout.
pub fn to_persian_date(date: DateTime, flag: PersianFormat) -> Result<String> {
    let persian = PersianDateTime::from_gregorian(date)?;

    let text = match flag {
        PersianFormat::SimpleDate => persian.date().to_string(),
        PersianFormat::LongDate => {
            let date = persian.date();
            format!(
                "{} {} {}",
                date.day(),
                month_name(date.month())?,
                date.year()
            )
        }
        PersianFormat::DateTime => persian.to_string(),
    };

    Ok(text)
}

fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::out_of_range("persian year", year))
    }
}

fn parse_component(part: &str) -> Result<i64> {
    part.trim()
        .parse()
        .map_err(|_| Error::InvalidComponent(part.to_string()))
}

/// 1 Farvardin of the Persian year described by `info`, as a Gregorian date.
fn nowruz(info: &YearInfo) -> Result<Date> {
    let year = i16::try_from(info.gregorian_year)
        .map_err(|_| Error::out_of_range("gregorian year", info.gregorian_year))?;
    let day = i8::try_from(info.march_day)
        .map_err(|_| Error::out_of_range("day", info.march_day))?;

    Date::new(year, 3, day).map_err(|_| Error::out_of_range("gregorian year", info.gregorian_year))
}

#[cfg(test)]
mod tests {
    use farsikit_common::ErrorKind;
    use jiff::civil::{date, datetime};

    use super::*;

    #[test]
    fn reference_conversions() {
        let cases = [
            ("1404/06/02", date(2025, 8, 24)),
            ("1404/01/01", date(2025, 3, 21)),
            ("1403/12/30", date(2025, 3, 20)),
            ("1403/01/01", date(2024, 3, 20)),
            ("1357/11/22", date(1979, 2, 11)),
            ("1378/10/11", date(2000, 1, 1)),
            ("1399/12/30", date(2021, 3, 20)),
        ];

        for (persian, gregorian) in cases {
            let parsed: PersianDate = persian.parse().unwrap();
            assert_eq!(parsed.to_gregorian().unwrap(), gregorian, "{persian}");
            assert_eq!(
                PersianDate::from_gregorian(gregorian).unwrap().to_string(),
                persian
            );
        }
    }

    #[test]
    fn persian_to_gregorian_is_midnight() {
        let dt = persian_to_gregorian("1404/06/02").unwrap();
        assert_eq!(dt, datetime(2025, 8, 24, 0, 0, 0, 0));
    }

    #[test]
    fn roundtrip_through_gregorian() {
        let dt = persian_to_gregorian("1404/06/02").unwrap();
        assert_eq!(
            to_persian_date(dt, PersianFormat::SimpleDate).unwrap(),
            "1404/06/02"
        );
    }

    #[test]
    fn parse_errors_have_the_right_kind() {
        let kind = |s: &str| persian_to_gregorian(s).unwrap_err().kind();

        assert_eq!(kind(""), ErrorKind::Validation);
        assert_eq!(kind("   "), ErrorKind::Validation);
        assert_eq!(kind("1404/06"), ErrorKind::Format);
        assert_eq!(kind("1404/06/02/01"), ErrorKind::Format);
        assert_eq!(kind("1404/ab/02"), ErrorKind::Format);
        assert_eq!(kind("1404/13/40"), ErrorKind::Range);
        assert_eq!(kind("1404/12/30"), ErrorKind::Range);
        assert_eq!(kind("1404/07/31"), ErrorKind::Range);
        assert_eq!(kind("0/01/01"), ErrorKind::Range);
        assert_eq!(kind("1404/300/01"), ErrorKind::Range);
        assert_eq!(kind("99999999999/01/01"), ErrorKind::Range);
    }

    #[test]
    fn parse_accepts_unpadded_and_spaced_components() {
        let parsed: PersianDate = " 1404 / 6 / 2 ".parse().unwrap();
        assert_eq!(parsed, PersianDate::new(1404, 6, 2).unwrap());
    }

    #[test]
    fn layouts() {
        let dt = datetime(1979, 2, 11, 9, 5, 0, 0);

        assert_eq!(
            to_persian_date(dt, PersianFormat::SimpleDate).unwrap(),
            "1357/11/22"
        );
        assert_eq!(
            to_persian_date(dt, PersianFormat::LongDate).unwrap(),
            "22 بهمن 1357"
        );
        assert_eq!(
            to_persian_date(dt, PersianFormat::DateTime).unwrap(),
            "1357/11/22 09:05"
        );
    }

    #[test]
    fn long_date_is_unpadded() {
        let dt = datetime(2025, 3, 21, 0, 0, 0, 0);
        assert_eq!(
            to_persian_date(dt, PersianFormat::LongDate).unwrap(),
            "1 فروردین 1404"
        );
    }

    #[test]
    fn format_names_with_fallback() {
        assert_eq!(PersianFormat::from_name("long"), PersianFormat::LongDate);
        assert_eq!(PersianFormat::from_name("Long-Date"), PersianFormat::LongDate);
        assert_eq!(PersianFormat::from_name("date_time"), PersianFormat::DateTime);
        assert_eq!(PersianFormat::from_name("simple"), PersianFormat::SimpleDate);
        assert_eq!(PersianFormat::from_name("weird"), PersianFormat::SimpleDate);
    }

    #[test]
    fn month_names_are_bounded() {
        assert_eq!(month_name(1).unwrap(), "فروردین");
        assert_eq!(month_name(12).unwrap(), "اسفند");
        assert_eq!(month_name(0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(month_name(13).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn dates_before_the_calendar_are_rejected() {
        let err = PersianDate::from_gregorian(date(600, 1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn every_day_of_2024_and_2025_roundtrips() {
        let mut day = date(2024, 1, 1);
        let end = date(2026, 1, 1);
        let mut previous: Option<PersianDate> = None;

        while day < end {
            let persian = PersianDate::from_gregorian(day).unwrap();
            assert_eq!(persian.to_gregorian().unwrap(), day);
            if let Some(prev) = previous {
                assert!(prev < persian);
            }
            previous = Some(persian);
            day = day.tomorrow().unwrap();
        }
    }

    #[test]
    fn last_supported_year_roundtrips_into_next_gregorian_year() {
        for persian in ["3177/01/01", "3177/10/11", "3177/10/12", "3177/12/29"] {
            let gregorian = persian_to_gregorian(persian).unwrap();
            assert_eq!(
                to_persian_date(gregorian, PersianFormat::SimpleDate).unwrap(),
                persian
            );
        }

        let last = persian_to_gregorian("3177/12/29").unwrap().date();
        assert_eq!(last, date(3799, 3, 19));
        assert_eq!(
            PersianDate::from_gregorian(date(3799, 1, 1)).unwrap().to_string(),
            "3177/10/12"
        );

        let err = PersianDate::from_gregorian(last.tomorrow().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn first_supported_day() {
        let first = persian_to_gregorian("0001/01/01").unwrap().date();
        assert_eq!(PersianDate::from_gregorian(first).unwrap().to_string(), "0001/01/01");

        let err = PersianDate::from_gregorian(first.yesterday().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn leap_years_and_month_lengths() {
        assert!(is_leap_year(1403).unwrap());
        assert!(!is_leap_year(1404).unwrap());
        assert_eq!(days_in_month(1403, 12).unwrap(), 30);
        assert_eq!(days_in_month(1404, 12).unwrap(), 29);
        assert!(is_leap_year(0).is_err());
        assert!(PersianDate::new(1403, 12, 30).unwrap().is_leap_year());
    }

    #[test]
    fn serializes_as_text() {
        let date = PersianDate::new(1404, 6, 2).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"1404/06/02\"");

        let back: PersianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<PersianDate>("\"1404/13/01\"").is_err());
    }
}
