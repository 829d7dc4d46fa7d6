//! Number formatting for totals and readings.

/// Insert a space between every group of three integer digits.
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Format with a thousands separator and a fixed number of decimals.
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&formatted),
    }
}

/// Quantity with its unit, e.g. `"1 250.00 م³"`.
pub fn format_quantity(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format_number_with_decimals(value, 2)
    } else {
        format!("{} {}", format_number_with_decimals(value, 2), unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1 234 567.89");
    }

    #[test]
    fn test_small_and_negative_values() {
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1 234");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(1250.0, "م³"), "1 250.00 م³");
        assert_eq!(format_quantity(7.5, ""), "7.50");
    }
}
