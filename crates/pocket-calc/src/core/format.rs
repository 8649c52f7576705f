//! Display formatting
//!
//! The engine stores raw numerals; grouping is applied only when the display
//! is read.

/// Sentinel shown while the engine is in the error state
pub const ERROR_DISPLAY: &str = "Error";

/// Formats a raw display value with `,` thousands separators
///
/// The fractional part is left untouched and [`ERROR_DISPLAY`] passes through.
///
/// ```rust
/// use pocket_calc::core::format_display;
///
/// assert_eq!(format_display("1234567.89"), "1,234,567.89");
/// assert_eq!(format_display("Error"), "Error");
/// ```
#[must_use]
pub fn format_display(raw: &str) -> String {
    format_display_with(raw, Some(','))
}

/// Formats a raw display value with a custom separator, or none at all
#[must_use]
pub fn format_display_with(raw: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return raw.to_string();
    };
    if raw == ERROR_DISPLAY {
        return raw.to_string();
    }

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(raw.len() + integer.len() / 3);
    out.push_str(sign);
    out.push_str(&group_digits(integer, separator));
    out.push_str(fraction);
    out
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.chars().count();
    let mut out = String::with_capacity(integer.len() + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Renders a computed value as a raw display numeral
///
/// Uses the shortest representation that round-trips, never exponent
/// notation. Negative zero renders as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
