//! pt-BR display formatting for money, percentages, and dates.
//!
//! One-directional: these produce strings for rendering, with no parse
//! counterpart. Monetary values use [`rust_decimal::Decimal`] — never
//! floating point. Brazilian convention throughout: `.` groups thousands,
//! `,` marks the decimal.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

const WEEKDAYS_PT: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Format a monetary amount as Brazilian real, e.g. `"R$ 1.234,56"`.
///
/// Rounds to 2 decimal places, half away from zero. The sign precedes the
/// currency symbol: `"-R$ 0,50"`.
///
/// ```
/// use rust_decimal_macros::dec;
/// assert_eq!(cadastro::format_currency(dec!(1234.5)), "R$ 1.234,50");
/// assert_eq!(cadastro::format_currency(dec!(-0.5)), "-R$ 0,50");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {}", grouped_fixed2(rounded.abs()))
}

/// Format a percentage already expressed in percent units: `12.5` →
/// `"12,5%"`.
///
/// Rounded to 2 decimal places, trailing zeros trimmed, no grouping.
///
/// ```
/// use rust_decimal_macros::dec;
/// assert_eq!(cadastro::format_percent(dec!(12.50)), "12,5%");
/// assert_eq!(cadastro::format_percent(dec!(100)), "100%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{}%", rounded.to_string().replace('.', ","))
}

/// Format a date in Brazilian short form, `dd/mm/yyyy`.
///
/// ```
/// use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap();
/// assert_eq!(cadastro::format_date(date), "29/08/2025");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date in long Portuguese form,
/// `"sexta-feira, 29 de agosto de 2025"`.
pub fn long_date_pt_br(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_PT[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_PT[date.month0() as usize];
    format!("{weekday}, {} de {month} de {}", date.day(), date.year())
}

/// Fixed 2-decimal rendering with `.`-grouped thousands and `,` decimal.
fn grouped_fixed2(value: Decimal) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(frac);
    out
}
