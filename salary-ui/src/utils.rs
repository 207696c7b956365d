/// Parses a form string into an `f64`.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// float literal, including empty input and `,` separators, becomes `NaN`
/// and is logged.
pub fn parse_amount(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "unparseable amount, using NaN: {}", e);
        f64::NAN
    })
}

/// Inserts `,` between groups of three integer digits of a plain decimal
/// string such as `"-1234567.50"`.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_numbers() {
        assert_eq!(parse_amount("50000"), 50000.0);
        assert_eq!(parse_amount("1234.56"), 1234.56);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }

    #[test]
    fn parse_amount_rejects_comma_separators() {
        assert!(parse_amount("50,000").is_nan());
        assert!(parse_amount("1,234.56").is_nan());
        assert!(parse_amount("1,2,3").is_nan());
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  "), 123.45);
    }

    #[test]
    fn parse_amount_invalid_is_nan() {
        assert!(parse_amount("abc").is_nan());
        assert!(parse_amount("12abc").is_nan());
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("   ").is_nan());
    }

    #[test]
    fn parse_amount_keeps_sign() {
        assert_eq!(parse_amount("-500"), -500.0);
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("26250"), "26,250");
        assert_eq!(group_thousands("1234567.50"), "1,234,567.50");
    }

    #[test]
    fn group_thousands_keeps_sign_out_of_grouping() {
        assert_eq!(group_thousands("-123456.00"), "-123,456.00");
        assert_eq!(group_thousands("-100"), "-100");
    }
}
