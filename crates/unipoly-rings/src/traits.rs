//! Coefficient traits.
//!
//! Polynomials are generic over these traits. Addition, multiplication and
//! evaluation only need a [`Ring`]; long division additionally needs
//! [`Field`], and the textual rendering needs [`OrderedRing`] to split a
//! coefficient into sign and magnitude.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Coefficients that can be added, subtracted and multiplied.
///
/// Implementations are expected to satisfy the commutative ring axioms with
/// `zero()` and `one()` as identities. Only `PartialEq` is required so that
/// floating point coefficients can participate.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Tests against [`Ring::zero`].
    fn is_zero(&self) -> bool;

    /// Tests against [`Ring::one`].
    fn is_one(&self) -> bool;

    /// Multiplies by an integer through repeated addition.
    ///
    /// Concrete types with a cheaper embedding of the integers override this.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let sum = (0..n.unsigned_abs()).fold(Self::zero(), |acc, _| acc + self.clone());
        if n < 0 {
            -sum
        } else {
            sum
        }
    }

    /// Raises to a non-negative integer power.
    fn pow(&self, n: u32) -> Self {
        (0..n).fold(Self::one(), |acc, _| acc * self.clone())
    }
}

/// A [`Ring`] in which every nonzero element is invertible.
pub trait Field: Ring {
    /// Multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// `self / other`, or `None` when `other` is zero.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}

/// A [`Ring`] whose elements carry a sign.
pub trait OrderedRing: Ring + PartialOrd {
    /// Magnitude of the element.
    fn abs(&self) -> Self;

    /// `-1`, `0` or `1`.
    fn signum(&self) -> i8;
}
