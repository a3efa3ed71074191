//! Amount type for expense values
//!
//! Internally stores amounts in cents (i64) to avoid floating-point
//! comparisons when checking the entry limits. Input with more than two
//! fraction digits is rejected rather than rounded. Sums saturate at the
//! `i64` bounds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Represents an amount stored as cents (hundredths of the unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Smallest amount an entry may carry (0.1)
    pub const MIN_ENTRY: Amount = Amount::from_cents(10);

    /// Largest amount an entry may carry (1,000,000,000.00)
    pub const MAX_ENTRY: Amount = Amount::from_cents(100_000_000_000);

    /// Create an amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Amount;
    /// let amount = Amount::from_cents(350); // 3.50
    /// assert_eq!(amount.to_string(), "3.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount from user input
    ///
    /// Accepts plain decimal notation: "3.5", "-2", "0.10", ".5", "12.".
    /// At most two fraction digits are allowed.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let invalid = || AmountParseError::InvalidFormat(trimmed.to_string());

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        if fraction.len() > 2 {
            return Err(AmountParseError::TooPrecise(trimmed.to_string()));
        }

        let out_of_range = || AmountParseError::OutOfRange { negative };

        // Only digits remain, so a failed parse means the value is too large
        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let cents_digits: String = fraction.chars().chain("00".chars()).take(2).collect();
        let cents_value: i64 = cents_digits.parse().map_err(|_| invalid())?;

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_value))
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        f.pad(&format!(
            "{}{}.{:02}",
            sign,
            self.units().abs(),
            self.cents_part()
        ))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),
    #[error("Amount has more than two decimal places: {0}")]
    TooPrecise(String),
    #[error("Amount is out of range")]
    OutOfRange { negative: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_cents(350).to_string(), "3.50");
        assert_eq!(Amount::from_cents(0).to_string(), "0.00");
        assert_eq!(Amount::from_cents(5).to_string(), "0.05");
        assert_eq!(Amount::from_cents(-1050).to_string(), "-10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("3.5").unwrap().cents(), 350);
        assert_eq!(Amount::parse("20").unwrap().cents(), 2000);
        assert_eq!(Amount::parse(" 0.10 ").unwrap().cents(), 10);
        assert_eq!(Amount::parse(".5").unwrap().cents(), 50);
        assert_eq!(Amount::parse("12.").unwrap().cents(), 1200);
        assert_eq!(Amount::parse("-2").unwrap().cents(), -200);
    }

    #[test]
    fn test_parse_rejects_extra_fraction_digits() {
        assert_eq!(
            Amount::parse("3.999"),
            Err(AmountParseError::TooPrecise("3.999".into()))
        );
        assert!(matches!(
            Amount::parse("0.101"),
            Err(AmountParseError::TooPrecise(_))
        ));
        assert_eq!(Amount::parse("3.99").unwrap().cents(), 399);
    }

    #[test]
    fn test_parse_reports_out_of_range() {
        assert_eq!(
            Amount::parse("100000000000000000"),
            Err(AmountParseError::OutOfRange { negative: false })
        );
        assert_eq!(
            Amount::parse("-99999999999999999999"),
            Err(AmountParseError::OutOfRange { negative: true })
        );
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("[{:>8}]", Amount::from_cents(350)), "[    3.50]");
        assert_eq!(format!("[{:<6}]", Amount::from_cents(-5)), "[-0.05 ]");
    }

    #[test]
    fn test_add_saturates() {
        let big = Amount::from_cents(i64::MAX - 1);
        let total: Amount = [big, big].iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut acc = Amount::from_cents(i64::MIN + 1);
        acc += Amount::from_cents(-10);
        assert_eq!(acc.cents(), i64::MIN);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("1.2.3").is_err());
        assert!(Amount::parse("-").is_err());
        assert!(Amount::parse(".").is_err());
        assert!(Amount::parse("1e3").is_err());
        assert!(Amount::parse("+5").is_err());
    }

    #[test]
    fn test_minimum_entry_comparison() {
        assert!(Amount::parse("0.1").unwrap() >= Amount::MIN_ENTRY);
        assert!(Amount::parse("0.09").unwrap() < Amount::MIN_ENTRY);
    }

    #[test]
    fn test_sum() {
        let amounts = [Amount::from_cents(100), Amount::from_cents(250)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Amount::from_cents(350)).unwrap();
        assert_eq!(json, "350");
    }
}
