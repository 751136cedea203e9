use chrono::NaiveDate;
use devotional_core::navigator::Navigator;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn previous_from_first_of_month_lands_on_last_of_prior() {
    let mut nav = Navigator::new(ymd(2025, 3, 1));
    assert_eq!(nav.go_to_previous_day(), ymd(2025, 2, 28));

    nav.go_to_date(ymd(2024, 3, 1));
    assert_eq!(nav.go_to_previous_day(), ymd(2024, 2, 29));

    nav.go_to_date(ymd(2025, 5, 1));
    assert_eq!(nav.go_to_previous_day(), ymd(2025, 4, 30));
}

#[test]
fn next_from_december_31_rolls_the_year() {
    let mut nav = Navigator::new(ymd(2025, 12, 31));
    assert_eq!(nav.go_to_next_day(), ymd(2026, 1, 1));
    assert_eq!(nav.current(), ymd(2026, 1, 1));
}

#[test]
fn forward_then_back_returns_to_start() {
    let starts = [
        ymd(2025, 1, 31),
        ymd(2025, 2, 28),
        ymd(2024, 2, 28),
        ymd(2024, 2, 29),
        ymd(2025, 12, 31),
        ymd(2026, 1, 1),
        ymd(2025, 6, 15),
    ];
    for start in starts {
        let mut nav = Navigator::new(start);
        nav.go_to_next_day();
        assert_eq!(nav.go_to_previous_day(), start);
        nav.go_to_previous_day();
        assert_eq!(nav.go_to_next_day(), start);
    }
}

#[test]
fn init_resets_the_cursor() {
    let mut nav = Navigator::new(ymd(2025, 6, 2));
    nav.go_to_next_day();
    nav.init(ymd(2020, 1, 1));
    assert_eq!(nav.current(), ymd(2020, 1, 1));
}
