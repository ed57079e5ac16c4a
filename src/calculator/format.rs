//! Operand formatting for the display.

use super::number::parse_whole;

/// Default thousands separator.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Format an operand for display with `,` grouping.
///
/// Returns `None` when there is no operand to show.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    format_operand_with(operand, DEFAULT_SEPARATOR)
}

/// Format an operand for display using `separator` between digit groups.
///
/// The integer part is grouped in threes; a fractional part is shown exactly
/// as typed, so trailing zeros and a bare trailing `.` survive.
pub fn format_operand_with(operand: Option<&str>, separator: &str) -> Option<String> {
    let operand = operand?;

    Some(match operand.split_once('.') {
        Some((integer, decimal)) => {
            let decimal = decimal.split('.').next().unwrap_or("");
            format!("{}.{}", format_integer(integer, separator), decimal)
        }
        None => format_integer(operand, separator),
    })
}

/// Format the integer portion of an operand.
///
/// Plain digit strings are grouped as written, so operands longer than an
/// `f64` can hold keep every digit. Anything else goes through a numeric
/// parse and is printed with its exact decimal value.
fn format_integer(integer: &str, separator: &str) -> String {
    if let Some((sign, digits)) = split_plain_integer(integer) {
        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        return format!("{}{}", sign, group_digits(digits, separator));
    }

    let Some(value) = parse_whole(integer) else {
        return "NaN".to_string();
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let digits = format!("{:.0}", value.abs().round());

    format!("{}{}", sign, group_digits(&digits, separator))
}

/// Split an optionally signed run of ASCII digits into its sign and digits.
fn split_plain_integer(integer: &str) -> Option<(&'static str, &str)> {
    let (sign, digits) = match integer.as_bytes().first() {
        Some(b'-') => ("-", &integer[1..]),
        Some(b'+') => ("", &integer[1..]),
        _ => ("", integer),
    };

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some((sign, digits))
    } else {
        None
    }
}

/// Insert `separator` between groups of three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push_str(&separator.chars().rev().collect::<String>());
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_operand() {
        assert_eq!(format_operand(None), None);
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_operand(Some("5")).as_deref(), Some("5"));
        assert_eq!(format_operand(Some("1000")).as_deref(), Some("1,000"));
        assert_eq!(format_operand(Some("1234567")).as_deref(), Some("1,234,567"));
        assert_eq!(format_operand(Some("-1234")).as_deref(), Some("-1,234"));
    }

    #[test]
    fn test_fraction_kept_verbatim() {
        assert_eq!(format_operand(Some("1234.50")).as_deref(), Some("1,234.50"));
        assert_eq!(format_operand(Some("12.")).as_deref(), Some("12."));
        assert_eq!(format_operand(Some(".5")).as_deref(), Some("0.5"));
        assert_eq!(format_operand(Some("-0.25")).as_deref(), Some("-0.25"));
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_eq!(format_operand(Some("007")).as_deref(), Some("7"));
    }

    #[test]
    fn test_long_integers_keep_every_digit() {
        assert_eq!(
            format_operand(Some("18446744073709551616")).as_deref(),
            Some("18,446,744,073,709,551,616")
        );
        assert_eq!(
            format_operand(Some("123456789012345678901234")).as_deref(),
            Some("123,456,789,012,345,678,901,234")
        );
        assert_eq!(
            format_operand(Some("-98765432109876543210.5")).as_deref(),
            Some("-98,765,432,109,876,543,210.5")
        );
        assert_eq!(format_operand(Some("000")).as_deref(), Some("0"));
        assert_eq!(format_operand(Some("-0")).as_deref(), Some("-0"));
    }

    #[test]
    fn test_exponent_forms_print_exact_value() {
        assert_eq!(format_operand(Some("1e2")).as_deref(), Some("100"));
        assert_eq!(
            format_operand(Some("1.2345678901234567e+25")).as_deref(),
            Some("1.2345678901234567e+25")
        );
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_operand(Some("Infinity")).as_deref(), Some("∞"));
        assert_eq!(format_operand(Some("-Infinity")).as_deref(), Some("-∞"));
        assert_eq!(format_operand(Some("NaN")).as_deref(), Some("NaN"));
        assert_eq!(format_operand(Some("")).as_deref(), Some("0"));
    }

    #[test]
    fn test_exponent_results() {
        assert_eq!(
            format_operand(Some("1e+21")).as_deref(),
            Some("1,000,000,000,000,000,000,000")
        );
        assert_eq!(format_operand(Some("1.5e-7")).as_deref(), Some("1.5e-7"));
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(
            format_operand_with(Some("1234567.8"), " ").as_deref(),
            Some("1 234 567.8")
        );
        assert_eq!(format_operand_with(Some("1234567"), "").as_deref(), Some("1234567"));
    }
}
