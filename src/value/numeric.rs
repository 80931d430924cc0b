//! Numeric string classification.

/// A string that reads as a number.
///
/// Produced by [`parse_numeric`]; records whether the text carried a
/// decimal point, which is what separates integer-typed from float-typed
/// coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeric {
    /// The numeric value.
    pub value: f64,
    /// The value as an integer, when it is integral and fits in `i64`.
    pub integer: Option<i64>,
    /// Whether the text contained a `.`.
    pub has_decimal_point: bool,
    /// Whether the text contained an exponent (`e`/`E`).
    pub has_exponent: bool,
}

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// Classifies `text` as a numeric string.
///
/// Accepted: surrounding whitespace, an optional sign, digits with an
/// optional fractional part (`"5."` and `".5"` included) and an optional
/// exponent. Everything else (`"0x1A"`, `"3px"`, `""`) is not numeric.
///
/// # Examples
///
/// ```rust
/// use lambars_option::parse_numeric;
///
/// let numeric = parse_numeric(" -42 ").unwrap();
/// assert_eq!(numeric.integer, Some(-42));
/// assert!(!numeric.has_decimal_point);
///
/// assert!(parse_numeric("1.123").unwrap().has_decimal_point);
/// assert!(parse_numeric("3px").is_none());
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn parse_numeric(text: &str) -> Option<Numeric> {
    let trimmed = text.trim_matches(WHITESPACE);
    let bytes = trimmed.as_bytes();
    let mut position = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        position += 1;
    }

    let integer_digits = count_digits(&bytes[position..]);
    position += integer_digits;

    let mut fraction_digits = 0;
    let has_decimal_point = bytes.get(position) == Some(&b'.');
    if has_decimal_point {
        position += 1;
        fraction_digits = count_digits(&bytes[position..]);
        position += fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    let mut has_exponent = false;
    if matches!(bytes.get(position), Some(b'e' | b'E')) {
        let mut exponent_position = position + 1;
        if matches!(bytes.get(exponent_position), Some(b'+' | b'-')) {
            exponent_position += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_position..]);
        if exponent_digits == 0 {
            return None;
        }
        has_exponent = true;
        position = exponent_position + exponent_digits;
    }

    if position != bytes.len() {
        return None;
    }

    let value = trimmed.parse::<f64>().ok()?;
    let integer = if has_decimal_point || has_exponent {
        (value.fract() == 0.0 && value.abs() < 9.2e18).then_some(value as i64)
    } else {
        trimmed.parse::<i64>().ok()
    };

    Some(Numeric {
        value,
        integer,
        has_decimal_point,
        has_exponent,
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0.0, Some(0), false)]
    #[case("-0", 0.0, Some(0), false)]
    #[case("+5", 5.0, Some(5), false)]
    #[case("42", 42.0, Some(42), false)]
    #[case(" 42\n", 42.0, Some(42), false)]
    #[case("1.123", 1.123, None, true)]
    #[case("0.0", 0.0, Some(0), true)]
    #[case("-0.5", -0.5, None, true)]
    #[case(".5", 0.5, None, true)]
    #[case("5.", 5.0, Some(5), true)]
    #[case("1e3", 1000.0, Some(1000), false)]
    fn test_numeric_strings(
        #[case] text: &str,
        #[case] value: f64,
        #[case] integer: Option<i64>,
        #[case] has_decimal_point: bool,
    ) {
        let numeric = parse_numeric(text).unwrap();
        assert!((numeric.value - value).abs() < f64::EPSILON);
        assert_eq!(numeric.integer, integer);
        assert_eq!(numeric.has_decimal_point, has_decimal_point);
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("foo")]
    #[case("0G")]
    #[case("-0m")]
    #[case("3px")]
    #[case("#000000")]
    #[case("0x1A")]
    #[case(".")]
    #[case("-")]
    #[case("1e")]
    #[case("1.2.3")]
    #[case("1 2")]
    fn test_non_numeric_strings(#[case] text: &str) {
        assert!(parse_numeric(text).is_none());
    }

    #[test]
    fn test_integer_overflow_has_no_integer_form() {
        let numeric = parse_numeric("99999999999999999999").unwrap();
        assert_eq!(numeric.integer, None);
        assert!(!numeric.has_decimal_point);
    }

    #[test]
    fn test_exponent_is_recorded() {
        assert!(parse_numeric("1.5E-3").unwrap().has_exponent);
        assert!(!parse_numeric("15").unwrap().has_exponent);
    }
}
