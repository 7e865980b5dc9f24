//! Display formatting and input masking.
//!
//! Every function here is pure and total: malformed input degrades to a
//! placeholder instead of panicking, and each mask is idempotent when
//! re-applied to its own output filtered back to digits.

use chrono::{Locale, NaiveDate};

/// Rendered in place of a date or currency value that is missing or invalid.
pub const PLACEHOLDER: &str = "-";

/// Keeps only ASCII digits, dropping mask punctuation and anything else.
pub fn strip_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Takes the calendar-day component of an ISO 8601 date or date-time string.
///
/// Working on the literal date component sidesteps timezone conversion
/// entirely, so a stored day never shifts by one in the UI.
fn parse_date_component(value: &str) -> Option<NaiveDate> {
    let component = value.get(..10)?;
    NaiveDate::parse_from_str(component, "%Y-%m-%d").ok()
}

/// Long localized date for display, e.g. `05 de março de 2025`.
pub fn display_date(value: &str) -> String {
    match parse_date_component(value) {
        Some(date) => date
            .format_localized("%d de %B de %Y", Locale::pt_BR)
            .to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// `YYYY-MM-DD` for date-picker fields; empty when the input is unusable.
pub fn input_date(value: &str) -> String {
    match parse_date_component(value) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Formats a major-unit amount as pt-BR currency, e.g. `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Currency for read-only display; absent or non-finite values render as
/// the placeholder instead of failing.
pub fn display_currency(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format_brl(value),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Currency for a masked text input; empty when nothing was typed yet.
pub fn currency_input_value(value: Option<f64>) -> String {
    value
        .filter(|value| value.is_finite())
        .map(format_brl)
        .unwrap_or_default()
}

/// Parses a masked currency input: the typed digits are minor units, so the
/// amount is their value divided by 100, exact to two decimal places.
pub fn parse_currency(input: &str) -> Option<f64> {
    let digits = strip_digits(input);
    if digits.is_empty() {
        return None;
    }
    let cents: u64 = digits.parse().ok()?;
    Some(cents as f64 / 100.0)
}

/// Masks a tax id: 11 digits use the person grouping `xxx.xxx.xxx-xx`,
/// 14 digits the organization grouping `xx.xxx.xxx/xxxx-xx`. Incomplete
/// input stays unmasked so typing never fights the cursor.
pub fn format_tax_id(value: &str) -> String {
    let digits = strip_digits(value);
    match digits.len() {
        11 => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        14 => format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        ),
        _ => digits,
    }
}

/// Masks a phone number: `(xx) xxxx-xxxx` up to 10 digits, `(xx) xxxxx-xxxx`
/// for 11. Fewer than 6 digits stay unmasked.
pub fn format_phone(value: &str) -> String {
    let digits = strip_digits(value);
    match digits.len() {
        0..=5 => digits,
        6..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DIGITS: &str = "12345678901234";

    #[test]
    fn tax_id_mask_round_trips_digits_for_every_length() {
        for length in 0..=14 {
            let digits = &DIGITS[..length];
            let masked = format_tax_id(digits);
            assert_eq!(strip_digits(&masked), digits, "length {length}");
            assert_eq!(format_tax_id(&masked), masked, "length {length}");
        }
    }

    #[test]
    fn tax_id_mask_shapes() {
        assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
        assert_eq!(format_tax_id("12345678901234"), "12.345.678/9012-34");
        assert_eq!(format_tax_id("123456"), "123456");
    }

    #[test]
    fn phone_mask_round_trips_digits_for_every_length() {
        for length in 0..=11 {
            let digits = &DIGITS[..length];
            let masked = format_phone(digits);
            assert_eq!(strip_digits(&masked), digits, "length {length}");
            assert_eq!(format_phone(&masked), masked, "length {length}");
        }
    }

    #[test]
    fn phone_mask_shapes() {
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("11987"), "11987");
    }

    #[test]
    fn display_date_renders_the_stored_day_without_timezone_shift() {
        assert_eq!(
            display_date("2025-03-05T00:00:00.000Z"),
            "05 de março de 2025"
        );
        assert_eq!(display_date("2025-03-05"), "05 de março de 2025");
    }

    #[test]
    fn display_date_degrades_to_the_placeholder() {
        assert_eq!(display_date(""), PLACEHOLDER);
        assert_eq!(display_date("amanhã"), PLACEHOLDER);
        assert_eq!(display_date("2025-13-40"), PLACEHOLDER);
    }

    #[test]
    fn input_date_truncates_to_the_calendar_day() {
        assert_eq!(input_date("2025-01-10T12:30:00.000Z"), "2025-01-10");
        assert_eq!(input_date("2025-01-10"), "2025-01-10");
        assert_eq!(input_date(""), "");
        assert_eq!(input_date("not-a-date"), "");
    }

    #[test]
    fn display_and_input_agree_on_the_calendar_day() {
        for iso in ["2024-12-31T23:59:59.000Z", "2025-06-01T00:00:00.000Z"] {
            let day = input_date(iso);
            assert_eq!(input_date(&day), day);
            assert_eq!(display_date(&day), display_date(iso));
        }
    }

    #[test]
    fn currency_formats_with_pt_br_grouping() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(0.5), "R$ 0,50");
        assert_eq!(format_brl(-12.0), "-R$ 12,00");
    }

    #[test]
    fn currency_display_never_panics_on_bad_input() {
        assert_eq!(display_currency(None), PLACEHOLDER);
        assert_eq!(display_currency(Some(f64::NAN)), PLACEHOLDER);
        assert_eq!(display_currency(Some(f64::INFINITY)), PLACEHOLDER);
        assert_eq!(currency_input_value(None), "");
    }

    #[test]
    fn currency_parse_treats_typed_digits_as_minor_units() {
        assert_eq!(parse_currency("123456"), Some(1234.56));
        assert_eq!(parse_currency("R$ 1.234,56"), Some(1234.56));
        assert_eq!(parse_currency("5"), Some(0.05));
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("R$ "), None);
    }

    #[test]
    fn currency_parse_and_format_round_trip() {
        for amount in [0.05, 12.0, 1234.56, 987_654.32] {
            let masked = format_brl(amount);
            assert_eq!(parse_currency(&masked), Some(amount));
        }
    }
}
