use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::editable::FieldValue;

const DEFAULT_DECIMALS: u32 = 2;
const DECIMAL_SEPARATOR: char = '.';
const THOUSANDS_SEPARATOR: char = ' ';

/// Longest exact fractional expansion of any `f64` (the smallest subnormal,
/// 2^-1074). Every digit past this position is zero.
pub const MAX_EXACT_DECIMALS: u32 = 1074;

/// Decimal precision used when displaying numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericFormat {
    decimals: u32,
}

impl Default for NumericFormat {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl NumericFormat {
    pub fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn format(&self, value: f64) -> String {
        format_number(value, self.decimals)
    }
}

/// Capability for elements that display a number.
pub trait HasNumericFormat {
    fn numeric_format(&self) -> &NumericFormat;

    fn numeric_format_mut(&mut self) -> &mut NumericFormat;

    fn set_decimals(&mut self, decimals: u32) -> &mut Self
    where
        Self: Sized,
    {
        self.numeric_format_mut().decimals = decimals;
        self
    }

    fn format_number(&self, value: f64) -> String {
        self.numeric_format().format(value)
    }
}

impl HasNumericFormat for NumericFormat {
    fn numeric_format(&self) -> &NumericFormat {
        self
    }

    fn numeric_format_mut(&mut self) -> &mut NumericFormat {
        self
    }
}

/// Format `value` with exactly `decimals` fractional digits, `.` as the
/// decimal separator and a space between thousands groups.
///
/// Output does not depend on the process locale. Rounding works on the exact
/// binary value, so `1.005` rounds to `1.00`. A result that rounds to zero
/// carries no minus sign. Non-finite values render as `NaN`, `inf`, `-inf`.
/// Precision beyond [`MAX_EXACT_DECIMALS`] is filled with zeros.
///
/// ```
/// use markup_fragments::format_number;
///
/// assert_eq!(format_number(1234.5, 2), "1 234.50");
/// assert_eq!(format_number(9.0, 0), "9");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = decimals.min(MAX_EXACT_DECIMALS) as usize;
    let mut fixed = format!("{:.*}", exact, value.abs());
    let padding = (decimals as usize).saturating_sub(exact);
    fixed.extend(std::iter::repeat('0').take(padding));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let negative = value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }
    out
}

/// Numeric reading of a field value, if it has one.
///
/// Finite numbers pass through. Text must look like a plain decimal number
/// (optional sign, optional fraction, optional exponent, surrounding
/// whitespace allowed); hex, `inf` and `NaN` spellings are rejected.
pub fn parse_numeric(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
        FieldValue::Text(s) => {
            static NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
            let re = NUMERIC_REGEX.get_or_init(|| {
                Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").unwrap()
            });
            if !re.is_match(s) {
                return None;
            }
            s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_and_decimals() {
        assert_eq!(format_number(1234.5, 2), "1 234.50");
        assert_eq!(format_number(1234567.891, 2), "1 234 567.89");
        assert_eq!(format_number(1000.0, 0), "1 000");
        assert_eq!(format_number(100.0, 0), "100");
    }

    #[test]
    fn test_zero_decimals_has_no_separator() {
        assert_eq!(format_number(9.0, 0), "9");
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(format_number(4.5, 1), "4.5");
    }

    #[test]
    fn test_rounding_carries_into_thousands() {
        assert_eq!(format_number(999.996, 2), "1 000.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_number(-1234.5, 2), "-1 234.50");
        assert_eq!(format_number(-0.001, 2), "0.00");
        assert_eq!(format_number(-0.0, 1), "0.0");
    }

    #[test]
    fn test_twenty_decimals_shows_exact_binary_value() {
        assert_eq!(format_number(1.5, 20), "1.50000000000000000000");
        assert_eq!(format_number(0.1, 20), "0.10000000000000000555");
    }

    #[test]
    fn test_precision_past_exact_digits_is_zero_padded() {
        let formatted = format_number(1.5, 70_000);
        let (int_part, frac) = formatted.split_once('.').unwrap();
        assert_eq!(int_part, "1");
        assert_eq!(frac.len(), 70_000);
        assert!(frac.starts_with('5'));
        assert!(frac[1..].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn test_smallest_subnormal_keeps_all_digits() {
        let formatted = format_number(f64::from_bits(1), MAX_EXACT_DECIMALS + 6);
        let frac = formatted.split_once('.').unwrap().1;
        assert_eq!(frac.len(), MAX_EXACT_DECIMALS as usize + 6);
        assert!(frac.ends_with("5000000"));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_number(f64::INFINITY, 2), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn test_numeric_format_default_is_two_decimals() {
        let format = NumericFormat::default();
        assert_eq!(format.decimals(), 2);
        assert_eq!(format.format(3.0), "3.00");
    }

    #[test]
    fn test_set_decimals_chains() {
        let mut format = NumericFormat::default();
        format.set_decimals(3).set_decimals(1);
        assert_eq!(format.format_number(2.26), "2.3");
    }

    #[test]
    fn test_parse_numeric_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_numeric(&FieldValue::Number(4.5)), Some(4.5));
        assert_eq!(parse_numeric(&"4.5".into()), Some(4.5));
        assert_eq!(parse_numeric(&"-12".into()), Some(-12.0));
        assert_eq!(parse_numeric(&" +3 ".into()), Some(3.0));
        assert_eq!(parse_numeric(&".5".into()), Some(0.5));
        assert_eq!(parse_numeric(&"1e3".into()), Some(1000.0));
    }

    #[test]
    fn test_parse_numeric_rejects_everything_else() {
        assert_eq!(parse_numeric(&"abc".into()), None);
        assert_eq!(parse_numeric(&"".into()), None);
        assert_eq!(parse_numeric(&"1 234".into()), None);
        assert_eq!(parse_numeric(&"0x1A".into()), None);
        assert_eq!(parse_numeric(&"inf".into()), None);
        assert_eq!(parse_numeric(&"NaN".into()), None);
        assert_eq!(parse_numeric(&FieldValue::Number(f64::NAN)), None);
        assert_eq!(parse_numeric(&FieldValue::Number(f64::INFINITY)), None);
    }
}
