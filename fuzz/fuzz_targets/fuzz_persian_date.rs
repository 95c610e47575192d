#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use farsikit_calendar::{PersianDate, PersianFormat, persian_to_gregorian, to_persian_date};
use jiff::civil::Date;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzDate {
    year: i16,
    month: i8,
    day: i8,
}

fuzz_target!(|data: &[u8]| {
    // Structured: any valid gregorian date either converts and round-trips, or is out of range
    let mut u = Unstructured::new(data);
    if let Ok(fuzz) = FuzzDate::arbitrary(&mut u)
        && let Ok(date) = Date::new(fuzz.year, fuzz.month, fuzz.day)
        && let Ok(persian) = PersianDate::from_gregorian(date)
    {
        assert_eq!(persian.to_gregorian().unwrap(), date);
        let text = to_persian_date(date.into(), PersianFormat::SimpleDate).unwrap();
        assert_eq!(text, persian.to_string());
    }

    // Raw text must never panic
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(gregorian) = persian_to_gregorian(text)
    {
        let back = to_persian_date(gregorian, PersianFormat::SimpleDate).unwrap();
        let reparsed: PersianDate = back.parse().unwrap();
        assert_eq!(reparsed, text.parse::<PersianDate>().unwrap());
    }
});
