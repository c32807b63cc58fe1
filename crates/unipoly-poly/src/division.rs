//! Polynomial long division.
//!
//! The quotient is built one term at a time: the leading term of the running
//! remainder is divided by the leading term of the divisor, and that multiple
//! of the divisor is subtracted. Each step lowers the order of the remainder,
//! so at most `order(a) - order(b) + 1` steps run.

use tracing::{debug, trace};
use unipoly_rings::traits::{Field, Ring};

use crate::error::{PolyError, PolyResult};
use crate::operand::Operand;
use crate::polynomial::Polynomial;

/// Divides `dividend` by a polynomial or scalar, returning `(quotient, remainder)`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if the divisor has no nonzero
/// coefficient.
pub fn divmod<F: Field>(
    dividend: &Polynomial<F>,
    divisor: impl Into<Operand<F>>,
) -> PolyResult<(Polynomial<F>, Polynomial<F>)> {
    long_division(dividend, &divisor.into().into_polynomial())
}

/// Returns the quotient of [`divmod`].
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] for a zero divisor.
pub fn floordiv<F: Field>(
    dividend: &Polynomial<F>,
    divisor: impl Into<Operand<F>>,
) -> PolyResult<Polynomial<F>> {
    divmod(dividend, divisor).map(|(quotient, _)| quotient)
}

/// Returns the remainder of [`divmod`].
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] for a zero divisor.
pub fn modulo<F: Field>(
    dividend: &Polynomial<F>,
    divisor: impl Into<Operand<F>>,
) -> PolyResult<Polynomial<F>> {
    divmod(dividend, divisor).map(|(_, remainder)| remainder)
}

fn long_division<F: Field>(
    dividend: &Polynomial<F>,
    divisor: &Polynomial<F>,
) -> PolyResult<(Polynomial<F>, Polynomial<F>)> {
    if divisor.is_zero() {
        debug!("rejecting division by the zero polynomial");
        return Err(PolyError::DivisionByZero);
    }

    let dividend_order = dividend.order();
    let divisor_order = divisor.order();
    debug!(dividend_order, divisor_order, "polynomial long division");

    if dividend_order < divisor_order {
        debug!("dividend order below divisor order, quotient is zero");
        return Ok((Polynomial::zero(), dividend.clone()));
    }

    let lead = divisor.leading_coeff();
    let divisor_coeffs = &divisor.coeffs()[..=divisor_order];
    let mut quotient = vec![F::zero(); dividend_order - divisor_order + 1];
    let mut remainder = dividend.coeffs().to_vec();
    let mut step = 0usize;

    while let Some(top) = remainder.iter().rposition(|c| !c.is_zero()) {
        if top < divisor_order {
            break;
        }

        let shift = top - divisor_order;
        let coeff = remainder[top]
            .checked_div(&lead)
            .ok_or(PolyError::DivisionByZero)?;

        for (j, d) in divisor_coeffs.iter().enumerate() {
            remainder[shift + j] = remainder[shift + j].clone() - coeff.clone() * d.clone();
        }
        // Pin the eliminated term so inexact fields still make progress.
        remainder[top] = F::zero();

        trace!(step, shift, "eliminated leading term");
        quotient[shift] = coeff;
        step += 1;
    }

    Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
}

impl<F: Field> Polynomial<F> {
    /// Divides by a polynomial or scalar, returning `(quotient, remainder)`.
    ///
    /// ```
    /// use unipoly_poly::Polynomial;
    /// use unipoly_rings::Q;
    ///
    /// // (x² - 3x - 10) / (x + 2) = x - 5
    /// let p = Polynomial::<Q>::from_values([-10, -3, 1]);
    /// let d = Polynomial::<Q>::from_values([2, 1]);
    /// let (quot, rem) = p.divmod(&d).unwrap();
    /// assert_eq!(quot, Polynomial::<Q>::from_values([-5, 1]));
    /// assert!(rem.is_zero());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] for a zero divisor.
    pub fn divmod(&self, divisor: impl Into<Operand<F>>) -> PolyResult<(Self, Self)> {
        divmod(self, divisor)
    }

    /// Returns the quotient of [`Polynomial::divmod`].
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] for a zero divisor.
    pub fn floordiv(&self, divisor: impl Into<Operand<F>>) -> PolyResult<Self> {
        floordiv(self, divisor)
    }

    /// Returns the remainder of [`Polynomial::divmod`].
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] for a zero divisor.
    pub fn modulo(&self, divisor: impl Into<Operand<F>>) -> PolyResult<Self> {
        modulo(self, divisor)
    }

    /// Scales the polynomial so that its leading coefficient is one.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] for the zero polynomial.
    pub fn monic(&self) -> PolyResult<Self> {
        let inv = self
            .leading_coeff()
            .inv()
            .ok_or(PolyError::DivisionByZero)?;
        Ok(self.scale(&inv))
    }

    /// Computes the monic greatest common divisor with the Euclidean algorithm.
    ///
    /// The gcd of two zero polynomials is zero.
    ///
    /// # Errors
    ///
    /// Propagates division errors; none occur for well-behaved fields.
    pub fn gcd(&self, other: &Self) -> PolyResult<Self> {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = long_division(&a, &b)?.1;
            a = b;
            b = r;
        }

        if a.is_zero() {
            Ok(Self::zero())
        } else {
            a.monic()
        }
    }
}
