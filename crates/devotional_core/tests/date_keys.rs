use chrono::{Datelike, NaiveDate};
use devotional_core::date_key::{from_picker_text, to_picker_text, DayKey};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn picker_text_round_trips_across_boundaries() {
    let samples = [
        ymd(2025, 1, 1),
        ymd(2024, 12, 31),
        ymd(2024, 2, 29),
        ymd(2023, 2, 28),
        ymd(2025, 3, 1),
        ymd(2025, 6, 30),
        ymd(1, 1, 1),
        ymd(9999, 12, 31),
        ymd(12345, 7, 4),
        ymd(-44, 3, 15),
    ];
    for date in samples {
        let text = to_picker_text(date);
        assert_eq!(from_picker_text(&text).expect("parse picker text"), date, "{text}");
    }
}

#[test]
fn every_day_of_a_leap_year_round_trips() {
    let mut date = ymd(2024, 1, 1);
    while date.year() == 2024 {
        let text = to_picker_text(date);
        assert_eq!(from_picker_text(&text).expect("parse"), date);
        date = date.succ_opt().expect("next day");
    }
}

#[test]
fn picker_text_is_calendar_fields() {
    assert_eq!(to_picker_text(ymd(2025, 6, 2)), "2025-06-02");
    assert_eq!(from_picker_text("2025-06-02").expect("parse"), ymd(2025, 6, 2));
}

#[test]
fn key_ignores_year() {
    let a = DayKey::from_date(ymd(2019, 6, 2));
    let b = DayKey::from_date(ymd(2032, 6, 2));
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "0602");
    assert_ne!(a, DayKey::from_date(ymd(2019, 6, 3)));
}

#[test]
fn key_is_shared_by_dates_on_the_same_month_day() {
    let key: DayKey = "1231".parse().expect("valid key");
    assert_eq!(DayKey::from_date(ymd(1999, 12, 31)), key);
    assert_eq!(DayKey::from_date(ymd(2100, 12, 31)), key);
    assert_ne!(DayKey::from_date(ymd(2100, 12, 30)), key);
    assert_eq!((key.month(), key.day()), (12, 31));
}
