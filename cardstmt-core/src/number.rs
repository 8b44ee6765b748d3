//! Locale-dependent number handling.
//!
//! Statement amounts are printed with grouping separators (`1,234.56`). The
//! separators are carried as an explicit value instead of process locale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub thousands_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            thousands_separator: ',',
        }
    }
}

impl NumberFormat {
    pub const fn new(decimal_separator: char, thousands_separator: char) -> Self {
        Self {
            decimal_separator,
            thousands_separator,
        }
    }

    /// Both separators must differ, and neither may be a digit or whitespace.
    pub fn is_valid(&self) -> bool {
        let usable = |c: char| !c.is_ascii_digit() && !c.is_whitespace();
        self.decimal_separator != self.thousands_separator
            && usable(self.decimal_separator)
            && usable(self.thousands_separator)
    }

    /// Remove every grouping separator from `s`.
    pub fn strip_grouping(&self, s: &str) -> String {
        s.replace(self.thousands_separator, "")
    }

    /// Parse the first whitespace-delimited token of `raw` as a number.
    ///
    /// Anything after the first token is ignored (`"99.00 Cr"` -> `99.00`).
    /// Scale is preserved, so `"99.00"` stays `99.00`.
    pub fn parse_amount(&self, raw: &str) -> Option<Decimal> {
        let token = raw.split_whitespace().next()?;

        let mut normalized = String::with_capacity(token.len() + 1);
        let mut seen_point = false;
        let mut seen_digit = false;
        for (i, c) in token.chars().enumerate() {
            if c == self.thousands_separator {
                continue;
            }
            if c == self.decimal_separator {
                if seen_point {
                    return None;
                }
                seen_point = true;
                if normalized.is_empty() || normalized == "-" {
                    normalized.push('0');
                }
                normalized.push('.');
            } else if c.is_ascii_digit() {
                seen_digit = true;
                normalized.push(c);
            } else if i == 0 && c == '-' {
                normalized.push(c);
            } else {
                return None;
            }
        }

        if !seen_digit {
            return None;
        }
        Decimal::from_str(&normalized).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_default_format() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.parse_amount("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(fmt.parse_amount("99.00 Cr"), Some(dec!(99.00)));
        assert_eq!(fmt.parse_amount(".50"), Some(dec!(0.50)));
    }

    #[test]
    fn test_scale_is_kept() {
        let amount = NumberFormat::default().parse_amount("99.00").unwrap();
        assert_eq!(amount.to_string(), "99.00");
    }

    #[test]
    fn test_european_format() {
        let fmt = NumberFormat::new(',', '.');
        assert!(fmt.is_valid());
        assert_eq!(fmt.parse_amount("1.234,56"), Some(dec!(1234.56)));
        assert_eq!(fmt.strip_grouping("1.234,56"), "1234,56");
    }

    #[test]
    fn test_rejects_garbage() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.parse_amount(""), None);
        assert_eq!(fmt.parse_amount("   "), None);
        assert_eq!(fmt.parse_amount("abc"), None);
        assert_eq!(fmt.parse_amount("1.2.3"), None);
        assert_eq!(fmt.parse_amount("."), None);
        assert_eq!(fmt.parse_amount("12a.00"), None);
    }

    #[test]
    fn test_invalid_formats() {
        assert!(!NumberFormat::new('.', '.').is_valid());
        assert!(!NumberFormat::new('1', ',').is_valid());
        assert!(!NumberFormat::new('.', ' ').is_valid());
    }
}
