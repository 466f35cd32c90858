//! Numeric helpers shared by every formula
//!
//! None of these fail. Unparsable input becomes 0, a division by zero
//! becomes 0, and rendering a non-finite value yields a dash.

use serde::{Deserialize, Serialize};

/// Tolerance used when checking whether a turnover count is whole
pub const WHOLE_TURN_EPSILON: f64 = 1e-9;

const GROUP_SEPARATOR: char = '\u{a0}';
const NOT_A_NUMBER: &str = "—";

/// One raw form value: either already numeric or typed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

pub fn to_number(raw: &RawValue) -> f64 {
    match raw {
        RawValue::Number(value) if value.is_finite() => *value,
        RawValue::Number(_) => 0.0,
        RawValue::Text(text) => parse_number(text),
    }
}

/// Parse the leading decimal literal of `text`, accepting `,` as the
/// decimal mark. Trailing garbage is ignored: `"12abc"` is 12.
pub fn parse_number(text: &str) -> f64 {
    let normalized = text.replacen(',', ".", 1);
    let literal = leading_literal(normalized.trim_start());
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn leading_literal(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Round half-up to `digits` decimal places; non-finite input gives NaN
pub fn round(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    let factor = 10f64.powi(digits as i32);
    (value * factor + 0.5).floor() / factor
}

/// Render with a decimal comma and exactly `digits` fraction digits.
///
/// Integer parts of five or more digits are grouped by threes with a
/// no-break space, the way Russian-locale number formatting does.
pub fn format_number(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return NOT_A_NUMBER.to_string();
    }
    let rounded = round(value, digits);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let plain = format!("{:.*}", digits as usize, rounded.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_digits(int_part: &str) -> String {
    if int_part.len() < 5 {
        return int_part.to_string();
    }
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Count rendered without fraction digits
pub fn format_count(value: u32) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal() {
        assert!((parse_number("12,5") - 12.5).abs() < f64::EPSILON);
        assert!((to_number(&RawValue::from("12,5")) - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(to_number(&RawValue::Number(f64::NAN)), 0.0);
        assert_eq!(to_number(&RawValue::Number(f64::INFINITY)), 0.0);
    }

    #[test]
    fn test_leading_literal_prefix() {
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("  -3.5 t"), -3.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("1e"), 1.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }

    #[test]
    fn test_only_first_comma_replaced() {
        assert!((parse_number("1,5,7") - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_safe_divide_zero_denominator() {
        for n in [0.0, 1.0, -7.5, 1e300] {
            assert_eq!(safe_divide(n, 0.0), 0.0);
        }
        assert_eq!(safe_divide(1.0, -0.0), 0.0);
    }

    #[test]
    fn test_safe_divide_non_finite() {
        assert_eq!(safe_divide(f64::NAN, 2.0), 0.0);
        assert_eq!(safe_divide(f64::INFINITY, 2.0), 0.0);
        assert_eq!(safe_divide(2.0, f64::NEG_INFINITY), 0.0);
        assert_eq!(safe_divide(9.0, 3.0), 3.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(1.4, 0), 1.0);
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -2.0);
        assert_eq!(round(1.23456, 3), 1.235);
        assert!(round(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_format_number_locale() {
        assert_eq!(format_number(1.48, 2), "1,48");
        assert_eq!(format_number(9.0, 2), "9,00");
        assert_eq!(format_number(1234.5, 2), "1234,50");
        assert_eq!(format_number(12528.0, 2), "12\u{a0}528,00");
        assert_eq!(format_number(1234567.891, 1), "1\u{a0}234\u{a0}567,9");
        assert_eq!(format_number(-45.678, 2), "-45,68");
        assert_eq!(format_number(0.5, 3), "0,500");
        assert_eq!(format_number(3.0, 0), "3");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN, 2), "—");
        assert_eq!(format_number(f64::INFINITY, 2), "—");
    }

    #[test]
    fn test_raw_value_untagged() {
        let number: RawValue = serde_json::from_str("4.5").unwrap();
        assert_eq!(number, RawValue::Number(4.5));
        let text: RawValue = serde_json::from_str("\"4,5\"").unwrap();
        assert_eq!(to_number(&text), 4.5);
    }
}
