//! # Display Formatting
//!
//! Every number the calculator shows goes through this module, so all call
//! sites share the same rounding and rendering rules.
//!
//! - [`round_significant`] rounds to a fixed count of significant digits and
//!   parses the text back, which drops binary representation noise.
//! - [`number_to_string`] renders the shortest decimal that round-trips,
//!   switching to exponent notation below `1e-6` and from `1e21` up.
//! - [`format_result`] combines both with [`DISPLAY_PRECISION`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::format_result;
//!
//! assert_eq!(format_result(0.1 + 0.2), "0.3");
//! assert_eq!(format_result(f64::NAN), "NaN");
//! assert_eq!(format_result(1e21), "1e+21");
//! ```

/// Significant digits kept for every computed result
pub const DISPLAY_PRECISION: usize = 12;

/// Token shown for a not-a-number result (e.g. division by zero)
pub const NAN_TOKEN: &str = "NaN";

/// Token shown for positive overflow
pub const INFINITY_TOKEN: &str = "Infinity";

/// Token shown after a domain error
pub const ERROR_TOKEN: &str = "Error";

/// Largest decimal exponent rendered without exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent rendered without exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Enough fractional digits to print any `f64` exactly
const EXACT_DIGITS: usize = 800;

/// Round a value to `digits` significant digits.
///
/// An exact tie rounds away from zero. Non-finite values and zero pass
/// through unchanged.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 || digits == 0 {
        return value;
    }
    if let Some(rounded) = round_tie_away(value, digits) {
        return rounded;
    }
    // `{:e}` rounds correctly; it only differs from the rule above on ties
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Round up in magnitude when the dropped digits are exactly `5000...`.
///
/// Returns `None` when the value is not an exact tie.
fn round_tie_away(value: f64, digits: usize) -> Option<f64> {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, exponent) = exact.split_once('e')?;
    let mut exponent: i32 = exponent.parse().ok()?;
    let all: Vec<u8> = mantissa.bytes().filter(|b| *b != b'.').collect();
    if digits >= all.len() {
        return None;
    }

    let (kept, dropped) = all.split_at(digits);
    if dropped[0] != b'5' || dropped[1..].iter().any(|d| *d != b'0') {
        return None;
    }

    let mut kept = kept.to_vec();
    let mut carry = true;
    for d in kept.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry {
        // 999.5 -> 1000
        kept.insert(0, b'1');
        kept.pop();
        exponent += 1;
    }

    let text = format!(
        "{}e{}",
        String::from_utf8(kept).ok()?,
        exponent - (digits as i32 - 1)
    );
    let magnitude: f64 = text.parse().ok()?;
    Some(magnitude.copysign(value))
}

/// Render a number as the shortest decimal text that parses back to it.
///
/// Integers print without a fractional part, `-0` prints as `0`, very large
/// or very small magnitudes use `d.ddde±N` notation.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return NAN_TOKEN.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY_TOKEN.to_string()
        } else {
            format!("-{}", INFINITY_TOKEN)
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let digit_count = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`
    let point = exponent + 1;

    if digit_count <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((point - digit_count) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (integer, fraction) = digits.split_at(point as usize);
        format!("{}.{}", integer, fraction)
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{}e{}{}", head, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", head, tail, sign, exponent.abs())
        }
    }
}

/// Format a computed result for the display.
pub fn format_result(value: f64) -> String {
    number_to_string(round_significant(value, DISPLAY_PRECISION))
}

/// Parse display text back into a number.
///
/// Text that is not a number (such as `"Error"`) parses as NaN.
pub fn parse_display(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// True if the text is a finite numeral that digit entry may extend
pub fn is_numeral(text: &str) -> bool {
    parse_display(text).is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_drops_float_noise() {
        assert_eq!(round_significant(0.1 + 0.2, 12), 0.3);
        assert_eq!(format_result(1.1 * 3.0), "3.3");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_result(100000000000.5), "100000000001");
        assert_eq!(format_result(-100000000000.5), "-100000000001");
        assert_eq!(round_significant(2.5, 1), 3.0);
        assert_eq!(round_significant(0.125, 2), 0.13);
        assert_eq!(round_significant(9.5, 1), 10.0);
        // Not an exact tie in binary, so the nearest value wins
        assert_eq!(round_significant(0.15, 1), 0.1);
    }

    #[test]
    fn test_integers_render_plain() {
        assert_eq!(number_to_string(14.0), "14");
        assert_eq!(number_to_string(-250.0), "-250");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
    }

    #[test]
    fn test_fractions_render_plain() {
        assert_eq!(number_to_string(123.456), "123.456");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(-0.5), "-0.5");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.5e-10), "1.5e-10");
        assert_eq!(format_result(7.257415615307994e306), "7.25741561531e+306");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(-0.0), "0");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("42"), 42.0);
        assert_eq!(parse_display("5."), 5.0);
        assert_eq!(parse_display("0."), 0.0);
        assert!(parse_display("Error").is_nan());
        assert!(parse_display("NaN").is_nan());
        assert_eq!(parse_display("Infinity"), f64::INFINITY);
        assert_eq!(parse_display("7.25741561531e+306"), 7.25741561531e306);
    }

    #[test]
    fn test_is_numeral() {
        assert!(is_numeral("0"));
        assert!(is_numeral("3.25"));
        assert!(!is_numeral("Error"));
        assert!(!is_numeral("NaN"));
        assert!(!is_numeral("Infinity"));
    }
}
