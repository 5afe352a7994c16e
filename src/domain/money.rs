use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary value attached to a shipping quote or a per-unit reduction.
///
/// Wraps `rust_decimal::Decimal` so quote costs never go through floating
/// point and so the zero floor lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(pub Decimal);

impl Cost {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Subtracts `rhs`, clamping the result at zero.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        let remaining = self.0.saturating_sub(rhs.0);
        if remaining < Decimal::ZERO {
            Self::ZERO
        } else {
            Self(remaining)
        }
    }

    /// A quote is free once its cost is at or below zero.
    pub fn is_free(&self) -> bool {
        self.0 <= Decimal::ZERO
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Cart totals come from untrusted product metadata, so the arithmetic
// saturates at the decimal bounds instead of panicking.
impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

// Per-unit reduction times line quantity.
impl Mul<u32> for Cost {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_mul(Decimal::from(rhs)))
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
