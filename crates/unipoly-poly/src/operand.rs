//! Right-hand operands of polynomial arithmetic.
//!
//! Every binary operation accepts either a polynomial or a bare coefficient.
//! Both are normalized into [`Operand`] at the call boundary, and the engine
//! only ever sees the polynomial form.

use std::any::{type_name, Any};

use unipoly_rings::traits::Ring;
use unipoly_rings::{Real, Q};

use crate::error::{PolyError, PolyResult};
use crate::polynomial::Polynomial;

/// A coefficient or a polynomial.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<R: Ring> {
    /// A bare coefficient, treated as a degree-0 polynomial.
    Scalar(R),
    /// A polynomial.
    Poly(Polynomial<R>),
}

impl<R: Ring> Operand<R> {
    /// Converts the operand into a polynomial. A scalar `c` becomes `[c]`.
    #[must_use]
    pub fn into_polynomial(self) -> Polynomial<R> {
        match self {
            Self::Scalar(c) => Polynomial::constant(c),
            Self::Poly(p) => p,
        }
    }
}

impl<R: Ring + 'static> Operand<R> {
    /// Resolves a dynamically typed value into an operand.
    ///
    /// Accepts `R`, `Polynomial<R>` and `Operand<R>`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::TypeMismatch`] naming `T` for any other type.
    pub fn from_value<T: Any>(value: &T) -> PolyResult<Self> {
        let any = value as &dyn Any;
        if let Some(c) = any.downcast_ref::<R>() {
            return Ok(Self::Scalar(c.clone()));
        }
        if let Some(p) = any.downcast_ref::<Polynomial<R>>() {
            return Ok(Self::Poly(p.clone()));
        }
        if let Some(op) = any.downcast_ref::<Self>() {
            return Ok(op.clone());
        }
        Err(PolyError::TypeMismatch {
            type_name: type_name::<T>(),
        })
    }
}

impl<R: Ring> From<Polynomial<R>> for Operand<R> {
    fn from(p: Polynomial<R>) -> Self {
        Self::Poly(p)
    }
}

impl<R: Ring> From<&Polynomial<R>> for Operand<R> {
    fn from(p: &Polynomial<R>) -> Self {
        Self::Poly(p.clone())
    }
}

macro_rules! impl_scalar_operand {
    ($($scalar:ty),*) => {$(
        impl From<$scalar> for Operand<$scalar> {
            fn from(c: $scalar) -> Self {
                Self::Scalar(c)
            }
        }

        impl From<&$scalar> for Operand<$scalar> {
            fn from(c: &$scalar) -> Self {
                Self::Scalar(c.clone())
            }
        }
    )*};
}

impl_scalar_operand!(Q, Real);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_becomes_constant() {
        let op: Operand<Q> = Q::from_integer(3).into();
        assert_eq!(op.into_polynomial(), Polynomial::constant(Q::from_integer(3)));
    }

    #[test]
    fn test_from_value_accepts_field_types() {
        let c = Q::new(1, 2);
        assert_eq!(Operand::<Q>::from_value(&c), Ok(Operand::Scalar(c.clone())));

        let p = Polynomial::<Q>::from_values([1, 2]);
        assert_eq!(Operand::<Q>::from_value(&p), Ok(Operand::Poly(p.clone())));

        let op = Operand::Poly(p.clone());
        assert_eq!(Operand::<Q>::from_value(&op), Ok(op));
    }

    #[test]
    fn test_from_value_names_rejected_type() {
        assert_eq!(
            Operand::<Q>::from_value(&"x + 1"),
            Err(PolyError::TypeMismatch { type_name: "&str" })
        );

        let err = Operand::<Q>::from_value(&2.5f64).unwrap_err();
        assert_eq!(err.to_string(), "unsupported operand type: f64");

        // A polynomial over a different field is a mismatch too.
        let real = Polynomial::<Real>::from_values([1.0]);
        assert!(matches!(
            Operand::<Q>::from_value(&real),
            Err(PolyError::TypeMismatch { .. })
        ));
    }
}
