//! Integer-cent money amounts.
//!
//! Everything the wallet touches is stored in whole cents so that ledger
//! arithmetic is exact. Per-minute pricing is prorated to the second and
//! rounded to the nearest cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A non-negative amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create an amount from whole cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole dollars.
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// The amount as a floating point dollar value (display only).
    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Cost of `seconds` at a per-minute `rate`, rounded half-up to the cent.
    ///
    /// ```
    /// use soulstream::models::Money;
    /// let rate = Money::from_cents(200);
    /// assert_eq!(Money::for_duration(rate, 90), Money::from_cents(300));
    /// ```
    pub fn for_duration(rate: Money, seconds: u64) -> Self {
        let numerator = rate.0 as u128 * seconds as u128;
        Self(((numerator + 30) / 60) as u64)
    }

    /// Subtract, clamping at zero.
    pub fn saturating_sub(self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Smaller of two amounts.
    pub fn min(self, other: Money) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
