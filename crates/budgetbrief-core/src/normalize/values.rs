use rust_decimal::Decimal;
use std::str::FromStr;

/// Characters stripped from a value cell before numeric coercion.
const FORMATTING: [char; 4] = ['$', '(', ')', ','];

/// Coerce a currency-formatted cell to a number.
///
/// Handles formats like:
/// - "$1,234" -> 1234
/// - "(500)" -> 500 (parentheses are removed, the sign is not flipped)
/// - "-12.5" -> -12.5
/// - "1.5e3" -> 1500
/// - "", "N/A", "-", "*" -> None
pub fn clean_value(cell: &str) -> Option<Decimal> {
    let stripped: String = cell.chars().filter(|c| !FORMATTING.contains(c)).collect();
    let s = stripped.trim();
    if s.is_empty() {
        return None;
    }

    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dollar_and_thousands() {
        assert_eq!(clean_value("$1,234"), Some(dec!(1234)));
    }

    #[test]
    fn test_decimal_millions() {
        assert_eq!(clean_value("$8,139.9"), Some(dec!(8139.9)));
    }

    #[test]
    fn test_parentheses_are_stripped_not_negated() {
        assert_eq!(clean_value("(500)"), Some(dec!(500)));
        assert_eq!(clean_value("($1,012.3)"), Some(dec!(1012.3)));
    }

    #[test]
    fn test_explicit_minus_kept() {
        assert_eq!(clean_value("-12.5"), Some(dec!(-12.5)));
    }

    #[test]
    fn test_scientific() {
        assert_eq!(clean_value("1.5e3"), Some(dec!(1500)));
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(clean_value("  $ 68  "), Some(dec!(68)));
    }

    #[test]
    fn test_not_applicable_is_missing() {
        assert_eq!(clean_value("N/A"), None);
    }

    #[test]
    fn test_empty_is_missing() {
        assert_eq!(clean_value(""), None);
        assert_eq!(clean_value("$"), None);
    }

    #[test]
    fn test_dash_and_label_are_missing() {
        assert_eq!(clean_value("-"), None);
        assert_eq!(clean_value("Enacted"), None);
        assert_eq!(clean_value("FY 2018"), None);
    }
}
