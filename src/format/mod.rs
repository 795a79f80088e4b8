//! Locale-invariant text helpers shared by the summary layer and presentation
//! code: month labels, date ranges, and US-style currency strings.

use chrono::{Datelike, NaiveDate};

/// Gallons in one cubic foot, used by water-chart axis notes.
pub const GALLONS_PER_CF: f64 = 7.481;

/// Abbreviated US-English month name plus 4-digit year, e.g. "Jan 2024".
pub fn month_year_label(date: NaiveDate) -> String {
    format!("{} {}", month_label(date.month()), date.year())
}

/// Month range with an en-dash separator, e.g. "Jan 2024 – Feb 2024".
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} – {}", month_year_label(start), month_year_label(end))
}

/// US-locale currency string: `$` prefix, comma grouping, fixed decimal places.
/// Rounds half away from zero at the requested precision.
pub fn format_currency(amount: f64, decimals: u8) -> String {
    let scale = 10f64.powi(decimals as i32);
    // `format!` rounds half to even; round explicitly first so $1,234.5 at zero
    // decimals renders as $1,235.
    let rounded = (amount * scale).round() / scale;
    let mut body = format!("{:.*}", decimals as usize, rounded.abs());
    let int_end = body.find('.').unwrap_or(body.len());
    let grouped = group_digits(&body[..int_end]);
    body.replace_range(..int_end, &grouped);
    if rounded < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_year_label_uses_abbreviations() {
        assert_eq!(month_year_label(date(2024, 1, 15)), "Jan 2024");
        assert_eq!(month_year_label(date(2023, 12, 31)), "Dec 2023");
    }

    #[test]
    fn date_range_uses_en_dash() {
        assert_eq!(
            format_date_range(date(2024, 1, 15), date(2024, 2, 15)),
            "Jan 2024 – Feb 2024"
        );
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(1234.5, 0), "$1,235");
        assert_eq!(format_currency(1234.5, 2), "$1,234.50");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1_234_567.0, 0), "$1,234,567");
        assert_eq!(format_currency(999.99, 2), "$999.99");
    }

    #[test]
    fn currency_negative_amounts_carry_sign() {
        assert_eq!(format_currency(-1234.5, 2), "-$1,234.50");
    }

    #[test]
    fn currency_zero() {
        assert_eq!(format_currency(0.0, 0), "$0");
    }
}
