//! Floating point coefficients.
//!
//! `Real` treats `f64` as a field. Equality is plain IEEE float
//! equality, so it only implements `PartialEq`; no attempt is made to
//! control rounding error.

use crate::traits::{Field, OrderedRing, Ring};

/// A double precision real number.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Real(pub f64);

impl Real {
    /// Creates a new real.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Ring for Real {
    fn zero() -> Self {
        Self(0.0)
    }

    fn one() -> Self {
        Self(1.0)
    }

    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    #[allow(clippy::float_cmp)]
    fn is_one(&self) -> bool {
        self.0 == 1.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(self.0 * n as f64)
    }
}

impl Field for Real {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(1.0 / self.0))
        }
    }

    fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            None
        } else {
            Some(Self(self.0 / other.0))
        }
    }
}

impl OrderedRing for Real {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        if self.0 > 0.0 {
            1
        } else if self.0 < 0.0 {
            -1
        } else {
            0
        }
    }
}

impl std::ops::Add for Real {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Real {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Real {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Real {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Real {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

// Integral values print without a fractional part: `2.0` renders as `2`.
impl std::fmt::Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
