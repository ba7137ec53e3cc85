use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalize a Brazilian-locale currency string into a Decimal.
///
/// Handles formats like:
/// - "250.000,00" -> 250000.00
/// - "R$ 5.500,50" -> 5500.50
/// - "1.234.567,89" -> 1234567.89
///
/// The currency symbol, whitespace and `.` thousands separators are
/// stripped; the decimal comma becomes a decimal point. This fails soft:
/// anything that still does not parse as a number yields `Decimal::ZERO`
/// rather than an error, so downstream filtering stays deterministic
/// (zero-value lots never clear the provision threshold).
pub fn parse_currency(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
        .collect();
    let normalized = cleaned.replace(',', ".");
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thousands_and_decimal_comma() {
        assert_eq!(parse_currency("250.000,00"), dec!(250000.00));
    }

    #[test]
    fn test_currency_symbol_stripped() {
        assert_eq!(parse_currency("R$ 5.500,50"), dec!(5500.50));
    }

    #[test]
    fn test_multiple_thousands_groups() {
        assert_eq!(parse_currency("1.234.567,89"), dec!(1234567.89));
    }

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_currency("500"), dec!(500));
    }

    #[test]
    fn test_sign_preserved() {
        assert_eq!(parse_currency("-5.000,00"), dec!(-5000.00));
    }

    #[test]
    fn test_empty_defaults_to_zero() {
        assert_eq!(parse_currency(""), Decimal::ZERO);
    }

    #[test]
    fn test_garbage_defaults_to_zero() {
        assert_eq!(parse_currency("abc"), Decimal::ZERO);
    }

    #[test]
    fn test_whitespace_only_defaults_to_zero() {
        assert_eq!(parse_currency("   "), Decimal::ZERO);
    }
}
