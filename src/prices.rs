//! Prices

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Deref},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits a price is rendered with.
const DISPLAY_DIGITS: u32 = 2;

/// Errors that can occur while constructing a price.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The amount was below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),

    /// The input could not be parsed as a decimal amount.
    #[error("invalid price: {0}")]
    Parse(String),
}

/// Represents a non-negative amount in major units (e.g. dollars).
///
/// The amount is kept exactly, sub-cent digits included. Rounding to two decimal places
/// happens only when the price is displayed, so totals are summed before they are rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// A price of nothing.
    pub const ZERO: Price = Price {
        value: Decimal::ZERO,
    };

    /// Creates a new price from minor units (pence/cents).
    pub fn from_minor(minor: u64) -> Self {
        Price {
            value: Decimal::from_i128_with_scale(i128::from(minor), DISPLAY_DIGITS),
        }
    }

    /// Creates a price from a decimal amount in major units (e.g. `2.50` or `0.125`).
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn from_decimal(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }

        // Clears the sign bit of `-0`.
        Ok(Price {
            value: amount.abs(),
        })
    }

    /// Returns the exact amount in major units.
    pub fn to_decimal(self) -> Decimal {
        self.value
    }

    /// Returns the price of `quantity` units, saturating at the maximum representable price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price {
            value: self.value.saturating_mul(Decimal::from(quantity)),
        }
    }

    /// Returns the amount rounded half away from zero to two decimal places.
    #[must_use]
    pub fn rounded(self) -> Decimal {
        let mut rounded = self
            .value
            .round_dp_with_strategy(DISPLAY_DIGITS, RoundingStrategy::MidpointAwayFromZero);

        rounded.rescale(DISPLAY_DIGITS);

        rounded
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price {
            value: self.value.saturating_add(rhs.value),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| PriceError::Parse(s.to_string()))?;

        Price::from_decimal(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
