//! Dense univariate polynomials.
//!
//! Coefficients are stored verbatim in ascending exponent order. Trailing
//! zeros are never trimmed, so the degree is recomputed from the storage on
//! every query, and every index past the end of the storage reads as zero.

use unipoly_rings::traits::Ring;

use crate::arith::mul_polys;
use crate::error::{PolyError, PolyResult};
use crate::range::CoeffRange;

/// Returns the coefficient of x^i in `coeffs`, or zero past the end.
#[must_use]
pub fn coefficient_at<R: Ring>(coeffs: &[R], i: usize) -> R {
    coeffs.get(i).cloned().unwrap_or_else(R::zero)
}

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order, exactly as passed in.
/// Equality compares values, not storage: `[1, 2]` equals `[1, 2, 0]`.
#[derive(Clone, Debug)]
pub struct Polynomial<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> Polynomial<R> {
    /// Creates a new polynomial from coefficients.
    ///
    /// The sequence is kept as given, trailing zeros included.
    #[must_use]
    pub fn new(coeffs: Vec<R>) -> Self {
        Self { coeffs }
    }

    /// Creates a polynomial from anything convertible into coefficients.
    ///
    /// ```
    /// use unipoly_poly::Polynomial;
    /// use unipoly_rings::Q;
    ///
    /// let p = Polynomial::<Q>::from_values([0, 1, 1, 0]);
    /// assert_eq!(p.order(), 2);
    /// assert_eq!(p.len(), 4);
    /// ```
    pub fn from_values<T, I>(values: I) -> Self
    where
        T: Into<R>,
        I: IntoIterator<Item = T>,
    {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    /// Creates the zero polynomial, which stores no coefficients.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the single term c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the order (degree) of the polynomial.
    ///
    /// This is the highest index holding a nonzero coefficient. A polynomial
    /// without nonzero coefficients has order 0, same as a constant; use
    /// [`Polynomial::is_zero`] to tell them apart.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// Returns true if no coefficient is nonzero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Returns the coefficient at the order index.
    #[must_use]
    pub fn leading_coeff(&self) -> R {
        self.get(self.order())
    }

    /// Returns the number of stored coefficients, trailing zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the stored coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its storage.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn get(&self, i: usize) -> R {
        coefficient_at(&self.coeffs, i)
    }

    /// Returns the coefficient of x^i for a signed index.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeIndex`] if `i` is negative.
    pub fn checked_get(&self, i: isize) -> PolyResult<R> {
        usize::try_from(i)
            .map(|i| self.get(i))
            .map_err(|_| PolyError::NegativeIndex(i))
    }

    /// Returns a lazy view of the coefficients at `start, start + step, ...`
    /// below `stop`.
    ///
    /// Indices past the stored length yield zero. The view can be iterated
    /// any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroStep`] if `step` is zero.
    pub fn get_range(&self, start: usize, stop: usize, step: usize) -> PolyResult<CoeffRange<'_, R>> {
        if step == 0 {
            return Err(PolyError::ZeroStep);
        }
        Ok(CoeffRange::new(&self.coeffs, start, stop, step))
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Walks the stored coefficients once in ascending order, keeping a
    /// running power of `x`.
    #[must_use]
    pub fn evaluate(&self, x: &R) -> R {
        let mut result = R::zero();
        let mut power = R::one();

        for c in &self.coeffs {
            result = result + c.clone() * power.clone();
            power = power * x.clone();
        }

        result
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().enumerate().skip(1) {
            result.push(c.mul_by_scalar(i as i64));
        }

        Self::new(result)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = mul_polys(&result, &base);
            }
            base = mul_polys(&base, &base);
            exp >>= 1;
        }

        result
    }

    /// Returns a copy without trailing zero coefficients.
    ///
    /// At most `order() + 1` coefficients are kept.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let keep = (self.order() + 1).min(self.coeffs.len());
        Self::new(self.coeffs[..keep].to_vec())
    }
}

impl<R: Ring> PartialEq for Polynomial<R> {
    fn eq(&self, other: &Self) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|i| self.get(i) == other.get(i))
    }
}

impl<R: Ring + Eq> Eq for Polynomial<R> {}

impl<R: Ring> Default for Polynomial<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Ring> From<Vec<R>> for Polynomial<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::new(coeffs)
    }
}

impl<R: Ring> FromIterator<R> for Polynomial<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
