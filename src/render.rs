//! Float rendering in the shortest-of-fixed-and-scientific style.
//!
//! A float renders with a fixed number of significant digits, in plain
//! notation when the rounded decimal exponent is moderate and in scientific
//! notation otherwise. Trailing fraction zeros are dropped either way, so
//! whole values come out bare: `100`, not `100.000000000000000`.

/// Formats `value` with `digits` significant digits.
///
/// Plain notation is used when the rounded exponent `x` satisfies
/// `-4 <= x < digits`; otherwise the mantissa is paired with a signed,
/// two-digit-minimum exponent like `e+16` or `e-05`. Non-finite values render
/// as `inf`, `-inf`, `nan` and `-nan`.
pub(crate) fn general(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let digits = digits.max(1);
    // rounding to the target precision can carry into the next decade, so
    // the exponent is read off the rounded scientific form
    let sci = format!("{:.*e}", digits - 1, value);
    let exponent = decimal_exponent(&sci);
    if exponent >= -4 && exponent < digits as i32 {
        let frac = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(format!("{:.*}", frac, value))
    } else {
        let mantissa = match sci.split_once('e') {
            Some((mantissa, _)) => mantissa,
            None => sci.as_str(),
        };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa.to_string()),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    }
}

fn decimal_exponent(sci: &str) -> i32 {
    match sci.split_once('e') {
        Some((_, exponent)) => exponent.parse().unwrap_or(0),
        None => 0,
    }
}

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(value: f64) -> String {
        general(value, f64::DIGITS as usize)
    }

    #[test]
    fn whole_values_render_bare() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(100.0), "100");
        assert_eq!(g(2_059_705.0), "2059705");
        assert_eq!(g(999_999_999_999_999.0), "999999999999999");
    }

    #[test]
    fn fractions_keep_their_significant_digits() {
        assert_eq!(g(0.001), "0.001");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(-1234.567), "-1234.567");
        assert_eq!(g(1_234_567.890_123_456_78), "1234567.89012346");
        assert_eq!(g(0.1 + 0.2), "0.3");
    }

    #[test]
    fn extreme_magnitudes_switch_to_scientific() {
        assert_eq!(g(1e15), "1e+15");
        assert_eq!(g(1e-5), "1e-05");
        assert_eq!(g(12_345_678_912_345_678.912_345_678_9), "1.23456789123457e+16");
        assert_eq!(g(f64::MAX), "1.79769313486232e+308");
        assert_eq!(g(-f64::MAX), "-1.79769313486232e+308");
        assert_eq!(g(f64::MIN_POSITIVE), "2.2250738585072e-308");
        assert_eq!(g(f64::from_bits(1)), "4.94065645841247e-324");
    }

    #[test]
    fn non_finite_values_use_lowercase_words() {
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(-f64::NAN), "-nan");
    }

    #[test]
    fn precision_is_honored_below_the_default() {
        assert_eq!(general(1234.567, 4), "1235");
        assert_eq!(general(1234.567, 2), "1.2e+03");
        assert_eq!(general(0.000_123_45, 3), "0.000123");
    }
}
