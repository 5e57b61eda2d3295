/// Append the exact decimal form of an integer.
pub fn write_integer_into<I: itoa::Integer>(out: &mut String, value: I) {
    let mut buffer = itoa::Buffer::new();
    out.push_str(buffer.format(value));
}

/// Shortest round-trip form of a double.
///
/// `ryu` always emits a fraction or an exponent (`1.0`, `1e20`), so a double
/// re-parses as a double rather than collapsing into an integer. JSON has no
/// spelling for NaN or infinities; those are written as `null`.
pub fn write_f64_into(out: &mut String, value: f64) {
    if !value.is_finite() {
        out.push_str("null");
        return;
    }
    let mut buffer = ryu::Buffer::new();
    out.push_str(buffer.format_finite(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(i64::from(i32::MAX), "2147483647")]
    #[case(-100, "-100")]
    #[case(i64::MAX, "9223372036854775807")]
    #[case(i64::MIN, "-9223372036854775808")]
    fn test_write_signed(#[case] value: i64, #[case] expected: &str) {
        let mut out = String::new();
        write_integer_into(&mut out, value);
        assert_eq!(out, expected);
    }

    #[rstest]
    fn test_write_unsigned() {
        let mut out = String::new();
        write_integer_into(&mut out, u32::MAX);
        out.push(',');
        write_integer_into(&mut out, u64::MAX);
        assert_eq!(out, "4294967295,18446744073709551615");
    }

    #[rstest]
    #[case(110.123, "110.123")]
    #[case(99.1234567, "99.1234567")]
    #[case(1.0, "1.0")]
    #[case(1e20, "1e20")]
    #[case(f64::NAN, "null")]
    #[case(f64::NEG_INFINITY, "null")]
    fn test_write_f64(#[case] value: f64, #[case] expected: &str) {
        let mut out = String::new();
        write_f64_into(&mut out, value);
        assert_eq!(out, expected);
    }
}
