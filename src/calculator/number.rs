//! Number parsing and printing with the conventions of a web calculator.
//!
//! Operands travel through the calculator as strings, so the exact rules for
//! turning them into `f64` and back decide what the user sees:
//!
//! - [`parse_prefix`] reads the longest numeric prefix (`"12abc"` is 12).
//! - [`parse_whole`] requires the whole trimmed string to be a number, with
//!   the empty string counting as zero.
//! - [`to_canonical_string`] prints the shortest round-trip digits, switching
//!   to exponent form below `1e-6` and from `1e21` upwards.

/// Parse the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped. Returns `None` when no number starts the
/// string.
pub fn parse_prefix(input: &str) -> Option<f64> {
    scan(input.trim_start()).map(|(value, _)| value)
}

/// Parse `input` as a number in its entirety.
///
/// Surrounding whitespace is ignored and an empty string is zero. Returns
/// `None` if anything other than a single numeric literal is present.
pub fn parse_whole(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match scan(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => Some(value),
        _ => None,
    }
}

/// Scan a numeric literal at the start of `s`.
///
/// Returns the value and the number of bytes consumed.
fn scan(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        let value = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((value, pos + "Infinity".len()));
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        // A lone "." only counts when digits precede it.
        if !int_digits.is_empty() || !frac_digits.is_empty() {
            pos = end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        let mut sign = "";
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            sign = if bytes[end] == b'-' { "-" } else { "" };
            end += 1;
        }
        let exp_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_start {
            exponent = format!("e{}{}", sign, &s[exp_start..end]);
            pos = end;
        }
    }

    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        exponent
    );

    normalized.parse::<f64>().ok().map(|value| (value, pos))
}

/// Shortest round-trip decimal digits of a finite, positive `value`.
///
/// Returns the digit string (no leading or trailing zeros) and the decimal
/// exponent `n` such that `value = 0.d1d2...dk * 10^n`.
pub(crate) fn shortest_digits(value: f64) -> (String, i32) {
    let repr = format!("{:e}", value);
    let (mantissa, exp) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    (digits.to_string(), exp + 1)
}

/// Convert a number to its canonical string form.
pub fn to_canonical_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, n) = shortest_digits(value.abs());
    let k = digits.len() as i32;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let exp_sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, e.abs())
        }
    };

    format!("{}{}", sign, body)
}
