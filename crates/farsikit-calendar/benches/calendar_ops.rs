use divan::Bencher;
use farsikit_calendar::{
    DateTimeFormat, PersianDate, PersianFormat, persian_to_gregorian, standardize_date_time,
    to_persian_date,
};
use jiff::civil::{date, datetime};

fn main() {
    divan::main();
}

#[divan::bench]
fn parse_and_convert() {
    divan::black_box(persian_to_gregorian(divan::black_box("1404/06/02")).unwrap());
}

#[divan::bench(args = ["simple", "long", "date-time"])]
fn gregorian_to_persian_text(flag: &str) {
    let dt = datetime(2025, 8, 24, 18, 45, 0, 0);
    let flag = PersianFormat::from_name(flag);
    divan::black_box(to_persian_date(divan::black_box(dt), flag).unwrap());
}

#[divan::bench]
fn standardize() {
    let dt = datetime(2025, 8, 24, 18, 45, 0, 0);
    divan::black_box(standardize_date_time(
        divan::black_box(dt),
        DateTimeFormat::DateTime,
    ));
}

#[divan::bench(min_time = 0.250)]
fn convert_full_year(bencher: Bencher) {
    bencher.bench_local(|| {
        let mut day = date(2025, 1, 1);
        for _ in 0..365 {
            divan::black_box(PersianDate::from_gregorian(day).unwrap());
            day = day.tomorrow().unwrap();
        }
    });
}
