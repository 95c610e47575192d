//! Fixed Gregorian date layouts

use jiff::civil::DateTime;

/// Output layout for [`standardize_date_time`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateTimeFormat {
    /// `yyyy/MM/dd`
    #[default]
    DateOnly,
    /// `yyyy/MM/dd HH:mm`
    DateTime,
}

impl DateTimeFormat {
    /// Look up a format by name, ignoring case and separators. Unknown names fall back to
    /// [`DateTimeFormat::DateOnly`].
    pub fn from_name(name: &str) -> Self {
        match squash(name).as_str() {
            "datetime" => DateTimeFormat::DateTime,
            _ => DateTimeFormat::DateOnly,
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            DateTimeFormat::DateOnly => "%Y/%m/%d",
            DateTimeFormat::DateTime => "%Y/%m/%d %H:%M",
        }
    }
}

/// Format a Gregorian date and time, no calendar conversion involved.
pub fn standardize_date_time(date: DateTime, format: DateTimeFormat) -> String {
    date.strftime(format.pattern()).to_string()
}

/// Lowercase `name` and drop `-`, `_` and spaces, so `Date-Time` and `date_time` match.
pub(crate) fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
