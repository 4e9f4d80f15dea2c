//! Price Value Type
//!
//! Fixed-point money stored as whole cents. Parsed once at the form boundary
//! and persisted as its canonical text (`"12.50"`).
//!
//! Saved catalogs may hold price text this parser would never produce
//! (`"5"`, `"1,50"`). Such text loads as [`Price::Stored`] and is written back
//! byte-for-byte, so loading never fails on a price and never rewrites one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-negative amount of money
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Price {
    /// Whole cents, rendered as `"12.50"`
    Cents(u64),
    /// Non-canonical saved text, kept verbatim. `cents` is set when it still parses.
    Stored { text: String, cents: Option<u64> },
}

/// Reasons a price string is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("price must not be negative")]
    Negative,
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0:?} has more than two decimal places")]
    TooPrecise(String),
    #[error("{0:?} is too large")]
    Overflow(String),
}

impl Price {
    pub const ZERO: Price = Price::Cents(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self::Cents(cents)
    }

    /// Amount in cents, if known
    pub fn cents(&self) -> Option<u64> {
        match self {
            Self::Cents(cents) => Some(*cents),
            Self::Stored { cents, .. } => *cents,
        }
    }

    /// Loaded as-is rather than in canonical form
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored { .. })
    }

    /// Read saved text. Canonical text becomes `Cents`; anything else is kept.
    pub fn from_stored(text: String) -> Self {
        match text.parse::<Price>() {
            Ok(price) if price.to_string() == text => price,
            parsed => Self::Stored {
                cents: parsed.ok().and_then(|p| p.cents()),
                text,
            },
        }
    }

    /// Parse user-entered text such as `"5"`, `"1.5"`, `"$3.25"`
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        text.parse()
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let body = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();

        if body.is_empty() {
            return Err(PriceError::Empty);
        }
        if body.starts_with('-') {
            return Err(PriceError::Negative);
        }

        let (units, fraction) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (units.is_empty() && fraction.is_empty()) || !all_digits(units) || !all_digits(fraction) {
            return Err(PriceError::NotANumber(trimmed.to_owned()));
        }
        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise(trimmed.to_owned()));
        }

        let overflow = || PriceError::Overflow(trimmed.to_owned());
        // Digits only at this point, so a failed parse means overflow.
        let units: u64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| overflow())?
        };
        let fraction_cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse().map_err(|_| overflow())?,
        };

        units
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Price::from_cents)
            .ok_or_else(overflow)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cents(cents) => write!(f, "{}.{:02}", cents / 100, cents % 100),
            Self::Stored { text, .. } => f.write_str(text),
        }
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Self::from_stored(text)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_forms() {
        assert_eq!(Price::parse("1.50").unwrap(), Price::from_cents(150));
        assert_eq!(Price::parse("1.5").unwrap(), Price::from_cents(150));
        assert_eq!(Price::parse("5").unwrap(), Price::from_cents(500));
        assert_eq!(Price::parse(" $3.25 ").unwrap(), Price::from_cents(325));
        assert_eq!(Price::parse(".99").unwrap(), Price::from_cents(99));
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
        assert_eq!(Price::parse("$"), Err(PriceError::Empty));
        assert_eq!(Price::parse("-1.00"), Err(PriceError::Negative));
        assert!(matches!(Price::parse("abc"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("1.2.3"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("."), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("1.505"), Err(PriceError::TooPrecise(_))));
        assert!(matches!(
            Price::parse("99999999999999999999"),
            Err(PriceError::Overflow(_))
        ));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Price::from_cents(150).to_string(), "1.50");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
        assert_eq!(Price::from_cents(120_000).to_string(), "1200.00");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_cents(150)).unwrap();
        assert_eq!(json, r#""1.50""#);

        let price: Price = serde_json::from_str(r#""0.50""#).unwrap();
        assert_eq!(price, Price::from_cents(50));
    }

    #[test]
    fn test_non_canonical_text_is_kept() {
        let short: Price = serde_json::from_str(r#""5""#).unwrap();
        assert!(short.is_stored());
        assert_eq!(short.cents(), Some(500));
        assert_eq!(short.to_string(), "5");
        assert_eq!(serde_json::to_string(&short).unwrap(), r#""5""#);

        let comma: Price = serde_json::from_str(r#""1,50""#).unwrap();
        assert_eq!(comma.cents(), None);
        assert_eq!(serde_json::to_string(&comma).unwrap(), r#""1,50""#);

        let padded = Price::from_stored(" 1.50".to_string());
        assert!(padded.is_stored());
        assert_eq!(padded.cents(), Some(150));
    }

    #[test]
    fn test_canonical_text_loads_as_cents() {
        assert_eq!(Price::from_stored("12.50".to_string()), Price::from_cents(1250));
        assert_eq!(Price::from_stored("0.07".to_string()), Price::from_cents(7));
    }
}
