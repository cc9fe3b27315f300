//! Type-safe price representation.
//!
//! Catalog prices are integer amounts in the currency's smallest display
//! unit (whole naira for the demo data) - there is no fractional currency
//! arithmetic anywhere in the system.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's smallest display unit.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: i64, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Create a price in naira, the demo catalog's currency.
    #[must_use]
    pub const fn naira(amount: i64) -> Self {
        Self::new(amount, CurrencyCode::NGN)
    }

    /// Format for display with thousands grouping (e.g., `₦12,500`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), group_thousands(self.amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NGN => "₦",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NGN => "NGN",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

/// Group an integer amount into comma-separated thousands.
#[must_use]
pub fn group_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        grouped.push('-');
    }

    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_display_naira() {
        assert_eq!(Price::naira(12500).display(), "₦12,500");
        assert_eq!(Price::naira(3500).to_string(), "₦3,500");
    }

    #[test]
    fn test_display_other_currencies() {
        assert_eq!(Price::new(65000, CurrencyCode::USD).display(), "$65,000");
        assert_eq!(CurrencyCode::NGN.code(), "NGN");
    }
}
