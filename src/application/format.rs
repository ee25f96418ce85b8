// Locale-aware display formatting (en conventions)

/// Format a number for display: thousands separators, at most three
/// fraction digits, trailing zeros trimmed. Non-finite input renders as 0.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    with_fraction_digits(value, 3)
}

/// Format a 0..1 fraction as a percentage with at most two fraction
/// digits. `format_percent(0.4)` is "40%".
pub fn format_percent(fraction: f64) -> String {
    let fraction = if fraction.is_finite() { fraction } else { 0.0 };
    format!("{}%", with_fraction_digits(fraction * 100.0, 2))
}

/// Percentage of `value` over `total`. A zero or absent denominator is the
/// empty state, not an error: the result is "0%", never NaN or Infinity.
pub fn percent_of(value: f64, total: f64) -> String {
    let ratio = value / total;
    format_percent(if ratio.is_finite() { ratio } else { 0.0 })
}

fn with_fraction_digits(value: f64, digits: usize) -> String {
    let formatted = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };
    let sign = if value < 0.0 && formatted.trim_matches(['0', '.']) != "" {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{}{}", sign, group_thousands(int_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_number_fraction_digits() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(3.0001), "3");
        assert_eq!(format_number(2.71828), "2.718");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(f64::INFINITY), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.4), "40%");
        assert_eq!(format_percent(0.123456), "12.35%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_format_percent_non_finite() {
        assert_eq!(format_percent(f64::NAN), "0%");
        assert_eq!(format_percent(f64::INFINITY), "0%");
    }

    #[test]
    fn test_percent_of_zero_denominator() {
        assert_eq!(percent_of(5.0, 0.0), "0%");
        assert_eq!(percent_of(0.0, 0.0), "0%");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(40.0, 100.0), "40%");
        assert_eq!(percent_of(1.0, 3.0), "33.33%");
    }
}
