//! Money Amounts
//!
//! Prices are held as whole cents and rendered as `$X.XX`.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a displayed price such as `$3.50`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("price cannot be negative: {0}")]
    Negative(String),
    #[error("price is not a number: {0}")]
    NotANumber(String),
    #[error("price has more than two decimal places: {0}")]
    TooManyDecimals(String),
    #[error("price is too large: {0}")]
    OutOfRange(String),
}

/// Non-negative amount of money in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Parse `$<number>`; the `$` is optional and surrounding whitespace is ignored
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        let number = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        if number.is_empty() {
            return Err(PriceError::Empty);
        }
        if number.starts_with('-') {
            return Err(PriceError::Negative(trimmed.to_string()));
        }

        let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) || (whole.is_empty() && frac.is_empty()) {
            return Err(PriceError::NotANumber(trimmed.to_string()));
        }
        if frac.len() > 2 {
            return Err(PriceError::TooManyDecimals(trimmed.to_string()));
        }

        let out_of_range = || PriceError::OutOfRange(trimmed.to_string());
        let dollars: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        // "5" -> 50 cents, "05" -> 5 cents
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => frac.parse().map_err(|_| out_of_range())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price::from_cents)
            .ok_or_else(out_of_range)
    }

    /// Price of `quantity` units
    pub fn times(&self, quantity: u32) -> Price {
        Price::from_cents(self.cents.saturating_mul(u64::from(quantity)))
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Price::parse(s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        write!(f, "${}.{:02}", cents / 100, cents % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_displayed_prices() {
        assert_eq!(Price::parse("$3.50").unwrap().cents(), 350);
        assert_eq!(Price::parse("$2.25").unwrap().cents(), 225);
        assert_eq!(Price::parse(" $4.00 ").unwrap().cents(), 400);
        assert_eq!(Price::parse("4").unwrap().cents(), 400);
        assert_eq!(Price::parse("$4.5").unwrap().cents(), 450);
        assert_eq!(Price::parse("$4.05").unwrap().cents(), 405);
        assert_eq!(Price::parse("$.75").unwrap().cents(), 75);
        assert_eq!(Price::parse("$7.").unwrap().cents(), 700);
        assert_eq!("$0.00".parse::<Price>().unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("$"), Err(PriceError::Empty));
        assert!(matches!(Price::parse("$-1.00"), Err(PriceError::Negative(_))));
        assert!(matches!(Price::parse("free"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("$1.2.3"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("$."), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("€3.50"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("$3.999"), Err(PriceError::TooManyDecimals(_))));
        assert!(matches!(
            Price::parse("$99999999999999999999"),
            Err(PriceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::ZERO.to_string(), "$0.00");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_cents(625).to_string(), "$6.25");
        assert_eq!(Price::from_cents(123_400).to_string(), "$1234.00");
    }

    #[test]
    fn test_times_and_sum() {
        let bagel = Price::from_cents(225);
        assert_eq!(bagel.times(1), bagel);
        assert_eq!(bagel.times(3).cents(), 675);

        let total: Price = [Price::from_cents(225), Price::from_cents(400)].into_iter().sum();
        assert_eq!(total.to_string(), "$6.25");

        let empty: Price = std::iter::empty().sum();
        assert_eq!(empty, Price::ZERO);
    }
}
