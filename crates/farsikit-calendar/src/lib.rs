//! Date formatting for the Gregorian calendar and conversion to and from the Persian
//! solar (Jalali) calendar. Civil dates and times are [`jiff::civil`] values.

#![forbid(unsafe_code)]

pub mod format;
pub mod persian;

mod jalali;

pub use format::{DateTimeFormat, standardize_date_time};
pub use persian::{
    MONTH_NAMES, PersianDate, PersianDateTime, PersianFormat, month_name, persian_to_gregorian,
    to_persian_date,
};
