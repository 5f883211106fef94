//! Money amounts in USD minor units
//!
//! All budget and earnings fields are integer cents. The accrual loop adds
//! deltas repeatedly, so floating point would drift; integer cents keep every
//! running total exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// USD amount in cents
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UsdCents(i64);

impl UsdCents {
    pub const ZERO: UsdCents = UsdCents(0);

    /// Create from raw cents
    #[inline]
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Create from whole dollars
    #[inline]
    #[must_use]
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Raw cent value
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Subtraction that never goes below zero
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: UsdCents) -> UsdCents {
        let diff = self.0 - rhs.0;
        UsdCents(if diff < 0 { 0 } else { diff })
    }

    /// The smaller of two amounts
    #[inline]
    #[must_use]
    pub fn min(self, rhs: UsdCents) -> UsdCents {
        UsdCents(self.0.min(rhs.0))
    }

    /// The larger of two amounts
    #[inline]
    #[must_use]
    pub fn max(self, rhs: UsdCents) -> UsdCents {
        UsdCents(self.0.max(rhs.0))
    }
}

impl Add for UsdCents {
    type Output = UsdCents;
    fn add(self, rhs: UsdCents) -> UsdCents {
        UsdCents(self.0 + rhs.0)
    }
}

impl AddAssign for UsdCents {
    fn add_assign(&mut self, rhs: UsdCents) {
        self.0 += rhs.0;
    }
}

impl Sub for UsdCents {
    type Output = UsdCents;
    fn sub(self, rhs: UsdCents) -> UsdCents {
        UsdCents(self.0 - rhs.0)
    }
}

impl SubAssign for UsdCents {
    fn sub_assign(&mut self, rhs: UsdCents) {
        self.0 -= rhs.0;
    }
}

impl Sum for UsdCents {
    fn sum<I: Iterator<Item = UsdCents>>(iter: I) -> UsdCents {
        iter.fold(UsdCents::ZERO, Add::add)
    }
}

impl fmt::Display for UsdCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for UsdCents {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl From<UsdCents> for i64 {
    fn from(amount: UsdCents) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(UsdCents::new(5000).to_string(), "$50.00");
        assert_eq!(UsdCents::new(107).to_string(), "$1.07");
        assert_eq!(UsdCents::new(-250).to_string(), "-$2.50");
        assert_eq!(UsdCents::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_from_dollars() {
        assert_eq!(UsdCents::from_dollars(10), UsdCents::new(1000));
    }

    #[test]
    fn test_saturating_sub() {
        let a = UsdCents::new(50);
        let b = UsdCents::new(80);
        assert_eq!(b.saturating_sub(a), UsdCents::new(30));
        assert_eq!(a.saturating_sub(b), UsdCents::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: UsdCents = [UsdCents::new(1), UsdCents::new(2), UsdCents::new(3)]
            .into_iter()
            .sum();
        assert_eq!(total, UsdCents::new(6));
    }
}
