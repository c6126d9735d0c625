//! Money amounts: the single parse and format routine for salaries
//!
//! Seed files store salaries as display strings (`₱45,000.00`). Some exports
//! carry the peso sign mis-decoded as `‚Ç±`; both spellings are stripped here
//! and nowhere else.

/// Символ валюты, используемый при форматировании
pub const CURRENCY_SYMBOL: &str = "₱";

const CURRENCY_MARKERS: [&str; 3] = ["‚Ç±", "₱", "PHP"];

/// Разбирает сумму, убирая символ валюты, пробелы и разделители тысяч
///
/// # Примеры
///
/// ```
/// use contracts::shared::money::parse_amount;
/// assert_eq!(parse_amount("₱45,000.50"), Some(45000.5));
/// assert_eq!(parse_amount("‚Ç±1,200"), Some(1200.0));
/// assert_eq!(parse_amount("n/a"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    let mut cleaned = raw.to_string();
    for marker in CURRENCY_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }
    let cleaned: String = cleaned
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    if !cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Форматирует сумму с разделителем тысяч (запятая) и 2 знаками после точки
///
/// # Примеры
///
/// ```
/// use contracts::shared::money::format_amount;
/// assert_eq!(format_amount(1234567.891), "₱1,234,567.89");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("₱45,000.00"), Some(45000.0));
        assert_eq!(parse_amount("‚Ç±32,500"), Some(32500.0));
        assert_eq!(parse_amount("PHP 1,000,000.25"), Some(1_000_000.25));
        assert_eq!(parse_amount("  980 "), Some(980.0));
        assert_eq!(parse_amount("-5"), Some(-5.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("₱"), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "₱0.00");
        assert_eq!(format_amount(999.5), "₱999.50");
        assert_eq!(format_amount(45000.0), "₱45,000.00");
        assert_eq!(format_amount(-1234.5), "-₱1,234.50");
    }

    #[test]
    fn test_format_then_parse() {
        let value = 87654.32;
        assert_eq!(parse_amount(&format_amount(value)), Some(value));
    }
}
