//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are recorded in the base currency ([`CurrencyCode::BASE`]).
//! The storefront shows them in the visitor's selected currency using fixed
//! display rates; stored orders keep the converted amount and its code.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Error parsing a currency code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The code is not one of the supported ISO 4217 codes.
    #[error("unsupported currency code: {0}")]
    Unsupported(String),
}

/// ISO 4217 currency codes supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    INR,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The currency catalog prices are recorded in.
    pub const BASE: Self = Self::USD;

    /// Every supported currency, in selector order.
    pub const ALL: [Self; 6] = [
        Self::USD,
        Self::EUR,
        Self::GBP,
        Self::INR,
        Self::CAD,
        Self::AUD,
    ];

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::INR => "INR",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Display symbol placed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
            Self::CAD => "CA$",
            Self::AUD => "A$",
        }
    }

    /// Units of this currency per one unit of [`Self::BASE`].
    #[must_use]
    pub const fn display_rate(self) -> Decimal {
        match self {
            Self::USD => Decimal::ONE,
            Self::EUR => Decimal::from_parts(92, 0, 0, false, 2),
            Self::GBP => Decimal::from_parts(79, 0, 0, false, 2),
            Self::INR => Decimal::from_parts(8300, 0, 0, false, 2),
            Self::CAD => Decimal::from_parts(136, 0, 0, false, 2),
            Self::AUD => Decimal::from_parts(152, 0, 0, false, 2),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CurrencyError::Unsupported(trimmed.to_string()))
    }
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the base currency.
    #[must_use]
    pub const fn base(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::BASE)
    }

    /// Convert to another currency at display rates, rounded to cents.
    #[must_use]
    pub fn convert(self, target: CurrencyCode) -> Self {
        if self.currency_code == target {
            return self;
        }
        let in_base = self.amount / self.currency_code.display_rate();
        let amount = (in_base * target.display_rate())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self::new(amount, target)
    }

    /// Multiply by a quantity (line totals).
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format for display (e.g., "$19.99", "₹1078.17").
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.2}", self.currency_code.symbol(), rounded)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::base(dec("12")).display(), "$12.00");
        assert_eq!(Price::base(dec("12.5")).display(), "$12.50");
    }

    #[test]
    fn test_convert_same_currency_is_identity() {
        let price = Price::base(dec("9.99"));
        assert_eq!(price.convert(CurrencyCode::USD), price);
    }

    #[test]
    fn test_convert_to_eur() {
        let price = Price::base(dec("10.00")).convert(CurrencyCode::EUR);
        assert_eq!(price.currency_code, CurrencyCode::EUR);
        assert_eq!(price.amount, dec("9.20"));
        assert_eq!(price.display(), "€9.20");
    }

    #[test]
    fn test_convert_rounds_to_cents() {
        let price = Price::base(dec("12.99")).convert(CurrencyCode::INR);
        assert_eq!(price.amount, dec("1078.17"));
    }

    #[test]
    fn test_times() {
        let line = Price::base(dec("2.50")).times(3);
        assert_eq!(line.display(), "$7.50");
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!(" GBP ".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert_eq!(
            "XYZ".parse::<CurrencyCode>(),
            Err(CurrencyError::Unsupported("XYZ".to_string()))
        );
    }

    #[test]
    fn test_codes_roundtrip() {
        for code in CurrencyCode::ALL {
            assert_eq!(code.code().parse::<CurrencyCode>().unwrap(), code);
        }
    }
}
