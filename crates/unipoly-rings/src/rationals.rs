//! The field of rational numbers Q.

use crate::traits::{Field, OrderedRing, Ring};
use unipoly_numbers::Rational;

/// The field of rational numbers.
///
/// This is a wrapper around `unipoly_numbers::Rational` that implements
/// the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::new(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns true if this rational has denominator 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        use num_traits::Zero;
        Self(Rational::zero())
    }

    fn one() -> Self {
        use num_traits::One;
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(&self.0 * &Rational::from(n))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        self.0.checked_recip().map(Self)
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

macro_rules! forward_binop {
    ($($Trait:ident, $method:ident);*) => {$(
        impl std::ops::$Trait for Q {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self(std::ops::$Trait::$method(self.0, rhs.0))
            }
        }
    )*};
}

forward_binop!(Add, add; Sub, sub; Mul, mul);

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Q {
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
