//! Result rounding, number rendering and display parsing.

/// Number of decimal places results are rounded to by default.
pub const DEFAULT_DECIMAL_PLACES: u32 = 8;

/// Largest supported rounding precision. Scaling an `f64` by more than
/// `10^15` starts dropping integer digits.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Round `value` to `places` decimal places, halves rounding up.
///
/// Scales by `10^places`, rounds to an integer with ties going towards
/// positive infinity, and scales back.
///
/// ```rust
/// use calcore::eval::round_to;
///
/// assert_eq!(round_to(2f64.sqrt(), 8), 1.41421356);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(-0.125, 2), -0.12);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    round_half_up(value * factor) / factor
}

fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Render a number the way the calculator shows it.
///
/// Integers have no fractional part, other values use the shortest
/// round-trip decimal form. Magnitudes of `1e21` and above, or below
/// `1e-6`, switch to exponent notation with an explicit exponent sign.
/// Negative zero renders as `0`.
///
/// ```rust
/// use calcore::eval::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(1.41421356), "1.41421356");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1e-7), "1e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{mantissa}e{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => scientific,
    }
}

/// Read the leading number of a display value.
///
/// Accepts an optional sign followed by a decimal literal (with optional
/// fraction and exponent) or `Infinity`; anything after the longest such
/// prefix is ignored. Returns `None` when no number starts the string.
///
/// ```rust
/// use calcore::eval::parse_leading_number;
///
/// assert_eq!(parse_leading_number("42"), Some(42.0));
/// assert_eq!(parse_leading_number("5."), Some(5.0));
/// assert_eq!(parse_leading_number("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_leading_number("Error"), None);
/// assert_eq!(parse_leading_number("-"), None);
/// ```
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
