//! Operator overloads.
//!
//! Every operator forwards to the routines in [`crate::arith`]. Scalar
//! operators are provided for the concrete coefficient fields; a scalar on
//! either side is treated as a degree-0 polynomial. Division is not an
//! operator because it can fail; use [`Polynomial::divmod`].

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use unipoly_rings::traits::Ring;
use unipoly_rings::{Real, Q};

use crate::arith::{add_polys, mul_polys, sub_polys};
use crate::polynomial::Polynomial;

macro_rules! impl_poly_binop {
    ($Trait:ident, $method:ident, $func:ident) => {
        impl<R: Ring> $Trait<&Polynomial<R>> for &Polynomial<R> {
            type Output = Polynomial<R>;

            fn $method(self, rhs: &Polynomial<R>) -> Polynomial<R> {
                $func(self, rhs)
            }
        }

        impl<R: Ring> $Trait for Polynomial<R> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                $func(&self, &rhs)
            }
        }

        impl<R: Ring> $Trait<&Polynomial<R>> for Polynomial<R> {
            type Output = Self;

            fn $method(self, rhs: &Polynomial<R>) -> Self {
                $func(&self, rhs)
            }
        }

        impl<R: Ring> $Trait<Polynomial<R>> for &Polynomial<R> {
            type Output = Polynomial<R>;

            fn $method(self, rhs: Polynomial<R>) -> Polynomial<R> {
                $func(self, &rhs)
            }
        }
    };
}

impl_poly_binop!(Add, add, add_polys);
impl_poly_binop!(Sub, sub, sub_polys);
impl_poly_binop!(Mul, mul, mul_polys);

// Compound assignment computes a new value and rebinds it.
macro_rules! impl_poly_assign {
    ($Trait:ident, $method:ident, $func:ident) => {
        impl<R: Ring> $Trait<&Polynomial<R>> for Polynomial<R> {
            fn $method(&mut self, rhs: &Polynomial<R>) {
                *self = $func(self, rhs);
            }
        }

        impl<R: Ring> $Trait for Polynomial<R> {
            fn $method(&mut self, rhs: Self) {
                *self = $func(self, &rhs);
            }
        }
    };
}

impl_poly_assign!(AddAssign, add_assign, add_polys);
impl_poly_assign!(SubAssign, sub_assign, sub_polys);
impl_poly_assign!(MulAssign, mul_assign, mul_polys);

impl<R: Ring> Neg for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(self) -> Polynomial<R> {
        self.coeffs().iter().map(|c| -c.clone()).collect()
    }
}

impl<R: Ring> Neg for Polynomial<R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.into_coeffs().into_iter().map(|c| -c).collect()
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {$(
        impl Add<$scalar> for Polynomial<$scalar> {
            type Output = Self;

            fn add(self, rhs: $scalar) -> Self {
                add_polys(&self, &Polynomial::constant(rhs))
            }
        }

        impl Add<$scalar> for &Polynomial<$scalar> {
            type Output = Polynomial<$scalar>;

            fn add(self, rhs: $scalar) -> Polynomial<$scalar> {
                add_polys(self, &Polynomial::constant(rhs))
            }
        }

        impl Add<Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn add(self, rhs: Polynomial<$scalar>) -> Polynomial<$scalar> {
                add_polys(&rhs, &Polynomial::constant(self))
            }
        }

        impl Sub<$scalar> for Polynomial<$scalar> {
            type Output = Self;

            fn sub(self, rhs: $scalar) -> Self {
                sub_polys(&self, &Polynomial::constant(rhs))
            }
        }

        impl Sub<$scalar> for &Polynomial<$scalar> {
            type Output = Polynomial<$scalar>;

            fn sub(self, rhs: $scalar) -> Polynomial<$scalar> {
                sub_polys(self, &Polynomial::constant(rhs))
            }
        }

        impl Sub<Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn sub(self, rhs: Polynomial<$scalar>) -> Polynomial<$scalar> {
                sub_polys(&Polynomial::constant(self), &rhs)
            }
        }

        impl Mul<$scalar> for Polynomial<$scalar> {
            type Output = Self;

            fn mul(self, rhs: $scalar) -> Self {
                mul_polys(&self, &Polynomial::constant(rhs))
            }
        }

        impl Mul<$scalar> for &Polynomial<$scalar> {
            type Output = Polynomial<$scalar>;

            fn mul(self, rhs: $scalar) -> Polynomial<$scalar> {
                mul_polys(self, &Polynomial::constant(rhs))
            }
        }

        impl Mul<Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn mul(self, rhs: Polynomial<$scalar>) -> Polynomial<$scalar> {
                mul_polys(&rhs, &Polynomial::constant(self))
            }
        }
    )*};
}

impl_scalar_ops!(Q, Real);

#[cfg(test)]
mod tests {
    use super::*;

    fn q(coeffs: &[i64]) -> Polynomial<Q> {
        Polynomial::from_values(coeffs.iter().copied())
    }

    #[test]
    fn test_polynomial_operators() {
        let p = q(&[1, 2]);
        let r = q(&[3, 4]);
        assert_eq!(&p + &r, q(&[4, 6]));
        assert_eq!(&p - &r, q(&[-2, -2]));
        assert_eq!(&p * &r, q(&[3, 10, 8]));
        assert_eq!(p.clone() + r.clone(), r.clone() + p.clone());
        assert_eq!(-&p, q(&[-1, -2]));
    }

    #[test]
    fn test_scalar_operators() {
        let p = q(&[1, 2]);
        assert_eq!(&p + Q::from_integer(1), q(&[2, 2]));
        assert_eq!(Q::from_integer(1) + p.clone(), q(&[2, 2]));
        assert_eq!(&p * Q::from_integer(2), q(&[2, 4]));
        assert_eq!(Q::from_integer(2) * p.clone(), q(&[2, 4]));
    }

    #[test]
    fn test_reflected_subtraction() {
        let p = q(&[1, 2]);
        // p - 5 = -4 + 2x, 5 - p = 4 - 2x
        assert_eq!(p.clone() - Q::from_integer(5), q(&[-4, 2]));
        assert_eq!(Q::from_integer(5) - p, q(&[4, -2]));
    }

    #[test]
    fn test_compound_assignment() {
        let mut p = q(&[1, 1]);
        p += &q(&[0, 0, 1]);
        assert_eq!(p, q(&[1, 1, 1]));
        p *= q(&[0, 1]);
        assert_eq!(p, q(&[0, 1, 1, 1]));
        p -= q(&[0, 1, 1, 1]);
        assert!(p.is_zero());
    }

    #[test]
    fn test_real_operators() {
        let p = Polynomial::<Real>::from_values([0.5, 1.0]);
        assert_eq!(&p * Real::new(2.0), Polynomial::<Real>::from_values([1.0, 2.0]));
        assert_eq!(Real::new(1.0) - p, Polynomial::<Real>::from_values([0.5, -1.0]));
    }
}
