use cadastro::{format_currency, format_date, format_percent, long_date_pt_br};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

#[test]
fn currency_two_fraction_digits_always() {
    assert_eq!(format_currency(dec!(1)), "R$ 1,00");
    assert_eq!(format_currency(dec!(1.5)), "R$ 1,50");
    assert_eq!(format_currency(dec!(1.55)), "R$ 1,55");
}

#[test]
fn currency_thousands_grouping() {
    assert_eq!(format_currency(dec!(999)), "R$ 999,00");
    assert_eq!(format_currency(dec!(1000)), "R$ 1.000,00");
    assert_eq!(format_currency(dec!(10000)), "R$ 10.000,00");
    assert_eq!(format_currency(dec!(100000)), "R$ 100.000,00");
    assert_eq!(format_currency(dec!(1234567.89)), "R$ 1.234.567,89");
}

#[test]
fn currency_rounds_half_away_from_zero() {
    assert_eq!(format_currency(dec!(2.675)), "R$ 2,68");
    assert_eq!(format_currency(dec!(2.674)), "R$ 2,67");
    assert_eq!(format_currency(dec!(-2.675)), "-R$ 2,68");
}

#[test]
fn currency_negative() {
    assert_eq!(format_currency(dec!(-1234.56)), "-R$ 1.234,56");
    assert_eq!(format_currency(dec!(-0.009)), "-R$ 0,01");
}

// ---------------------------------------------------------------------------
// Percent
// ---------------------------------------------------------------------------

#[test]
fn percent_plain_values() {
    assert_eq!(format_percent(dec!(0)), "0%");
    assert_eq!(format_percent(dec!(7)), "7%");
    assert_eq!(format_percent(dec!(100)), "100%");
}

#[test]
fn percent_decimal_comma() {
    assert_eq!(format_percent(dec!(12.5)), "12,5%");
    assert_eq!(format_percent(dec!(33.33)), "33,33%");
}

#[test]
fn percent_rounds_and_trims() {
    assert_eq!(format_percent(dec!(66.666)), "66,67%");
    assert_eq!(format_percent(dec!(25.00)), "25%");
    assert_eq!(format_percent(dec!(25.10)), "25,1%");
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn short_date_zero_padded() {
    assert_eq!(format_date(date(2025, 8, 29)), "29/08/2025");
    assert_eq!(format_date(date(2025, 1, 2)), "02/01/2025");
    assert_eq!(format_date(date(1999, 12, 31)), "31/12/1999");
}

#[test]
fn long_date_weekday_and_month_names() {
    assert_eq!(
        long_date_pt_br(date(2025, 8, 29)),
        "sexta-feira, 29 de agosto de 2025"
    );
    assert_eq!(
        long_date_pt_br(date(2025, 1, 1)),
        "quarta-feira, 1 de janeiro de 2025"
    );
    assert_eq!(
        long_date_pt_br(date(2024, 12, 25)),
        "quarta-feira, 25 de dezembro de 2024"
    );
}

#[test]
fn long_date_day_not_padded() {
    // "1 de março", not "01 de março"
    let s = long_date_pt_br(date(2026, 3, 1));
    assert_eq!(s, "domingo, 1 de março de 2026");
}
