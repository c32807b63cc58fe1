//! Coefficient-wise addition, subtraction and schoolbook multiplication.
//!
//! The `*_polys` routines work on two polynomials and only use the
//! zero-extending accessor, so storage length never matters. The public
//! functions accept any [`Operand`].

use unipoly_rings::traits::Ring;

use crate::operand::Operand;
use crate::polynomial::Polynomial;

/// Adds two polynomials up to the larger of their orders.
pub(crate) fn add_polys<R: Ring>(a: &Polynomial<R>, b: &Polynomial<R>) -> Polynomial<R> {
    let bound = a.order().max(b.order());
    (0..=bound).map(|i| a.get(i) + b.get(i)).collect()
}

/// Subtracts `b` from `a` up to the larger of their orders.
pub(crate) fn sub_polys<R: Ring>(a: &Polynomial<R>, b: &Polynomial<R>) -> Polynomial<R> {
    let bound = a.order().max(b.order());
    (0..=bound).map(|i| a.get(i) - b.get(i)).collect()
}

/// Schoolbook multiplication: O(n·m).
///
/// The result stores exactly `order(a) + order(b) + 1` coefficients.
pub(crate) fn mul_polys<R: Ring>(a: &Polynomial<R>, b: &Polynomial<R>) -> Polynomial<R> {
    let n = a.order();
    let m = b.order();
    let mut result = vec![R::zero(); n + m + 1];

    for i in 0..=n {
        let ai = a.get(i);
        for j in 0..=m {
            result[i + j] = result[i + j].clone() + ai.clone() * b.get(j);
        }
    }

    Polynomial::new(result)
}

/// Adds a polynomial or scalar to `lhs`.
pub fn add<R: Ring>(lhs: &Polynomial<R>, rhs: impl Into<Operand<R>>) -> Polynomial<R> {
    add_polys(lhs, &rhs.into().into_polynomial())
}

/// Subtracts a polynomial or scalar from `lhs`.
pub fn sub<R: Ring>(lhs: &Polynomial<R>, rhs: impl Into<Operand<R>>) -> Polynomial<R> {
    sub_polys(lhs, &rhs.into().into_polynomial())
}

/// Multiplies `lhs` by a polynomial or scalar.
pub fn mul<R: Ring>(lhs: &Polynomial<R>, rhs: impl Into<Operand<R>>) -> Polynomial<R> {
    mul_polys(lhs, &rhs.into().into_polynomial())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unipoly_rings::Q;

    fn q(coeffs: &[i64]) -> Polynomial<Q> {
        Polynomial::from_values(coeffs.iter().copied())
    }

    #[test]
    fn test_add() {
        // (1 + 2x) + (3 + 4x) = 4 + 6x
        let sum = add(&q(&[1, 2]), &q(&[3, 4]));
        assert_eq!(sum.coeffs(), q(&[4, 6]).coeffs());
    }

    #[test]
    fn test_add_result_length_follows_order() {
        // trailing zeros in either operand do not widen the result
        let sum = add(&q(&[1, 0, 0, 0]), &q(&[0, 1, 0]));
        assert_eq!(sum.len(), 2);

        // cancellation is kept as a trailing zero
        let diff = sub(&q(&[1, 2, 3]), &q(&[0, 0, 3]));
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.order(), 1);
    }

    #[test]
    fn test_scalar_operands() {
        let p = q(&[1, 2]);
        assert_eq!(add(&p, Q::from_integer(5)), q(&[6, 2]));
        assert_eq!(sub(&p, Q::from_integer(1)), q(&[0, 2]));
        assert_eq!(mul(&p, Q::from_integer(3)), q(&[3, 6]));
    }

    #[test]
    fn test_mul_schoolbook() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let prod = mul(&q(&[1, 2]), &q(&[3, 4]));
        assert_eq!(prod.coeffs(), q(&[3, 10, 8]).coeffs());
    }

    #[test]
    fn test_mul_by_zero() {
        let prod = mul(&q(&[1, 2, 3]), &Polynomial::zero());
        assert!(prod.is_zero());
        assert_eq!(prod.len(), 3);
    }
}
