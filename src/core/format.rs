//! Display helpers for money and percentages.

/// Inserts thousands separators: 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount: 2500000 -> "$2,500,000".
pub fn format_currency_whole(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Signed amount rounded to whole dollars: -12000.4 -> "-$12,000".
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, format_currency_whole(rounded.abs() as u64))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency_whole(2_500_000), "$2,500,000");
        assert_eq!(format_currency(-12_000.4), "-$12,000");
        assert_eq!(format_currency(1_999.5), "$2,000");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0), "25%");
        assert_eq!(format_percent(69.6), "70%");
    }
}
