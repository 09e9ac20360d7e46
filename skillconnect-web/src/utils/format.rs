//! # Formatting Utilities
//!
//! Money and rating formatting for the booking pages.
//! For address formatting, use [`shared::utils::truncate_address`].

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use skillconnect_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 0), "100");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Whole dollars as `$1,234.00`
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_number(amount as f64, 2))
}

/// Star rating with review count, e.g. `4.9 (128 reviews)`
pub fn format_rating(rating: f32, reviews: u32) -> String {
    format!("{:.1} ({} reviews)", rating, reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-1500.0, 0), "-1,500");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(225), "$225.00");
        assert_eq!(format_usd(1_200), "$1,200.00");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.9, 128), "4.9 (128 reviews)");
    }
}
