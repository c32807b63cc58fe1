//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::error::PolyError;
    use crate::polynomial::Polynomial;
    use unipoly_rings::traits::Ring;
    use unipoly_rings::Q;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (up to 6 stored terms,
    // trailing zeros allowed)
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 0..=6).prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Degree and access

        #[test]
        fn order_is_highest_nonzero_index(coeffs in proptest::collection::vec(-3i64..3i64, 0..=8)) {
            let expected = coeffs.iter().rposition(|c| *c != 0).unwrap_or(0);
            let p = Polynomial::<Q>::from_values(coeffs);
            prop_assert_eq!(p.order(), expected);
        }

        #[test]
        fn get_zero_extends(p in small_poly()) {
            for i in p.len()..p.len() + 50 {
                prop_assert!(p.get(i).is_zero());
            }
        }

        #[test]
        fn range_matches_get(p in small_poly(), start in 0usize..10, stop in 0usize..20, step in 1usize..4) {
            let range = p.get_range(start, stop, step).unwrap();
            let expected: Vec<Q> = (start..stop).step_by(step).map(|i| p.get(i)).collect();
            prop_assert_eq!(range.iter().collect::<Vec<_>>(), expected);
            prop_assert_eq!(range.len(), range.iter().count());
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::<Q>::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&a + Q::zero(), a);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over a field
            prop_assert_eq!((&a * &b).order(), a.order() + b.order());
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let sum = &a + &b;
            prop_assert_eq!(sum.evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let product = &a * &b;
            prop_assert_eq!(product.evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
        }

        // Division

        #[test]
        fn division_law(a in small_poly(), b in nonzero_poly()) {
            // a = b * (a // b) + a % b
            let (quot, rem) = a.divmod(&b).unwrap();
            prop_assert_eq!(&(&b * &quot) + &rem, a.clone());
            if !rem.is_zero() {
                prop_assert!(rem.order() < b.order());
            }
        }

        #[test]
        fn floordiv_and_modulo_agree_with_divmod(a in small_poly(), b in nonzero_poly()) {
            let (quot, rem) = a.divmod(&b).unwrap();
            prop_assert_eq!(a.floordiv(&b).unwrap(), quot);
            prop_assert_eq!(a.modulo(&b).unwrap(), rem);
        }

        #[test]
        fn division_of_product_is_exact(a in small_poly(), b in nonzero_poly()) {
            let (quot, rem) = (&a * &b).divmod(&b).unwrap();
            prop_assert_eq!(quot, a);
            prop_assert!(rem.is_zero());
        }

        #[test]
        fn lower_order_dividend_is_remainder(a in small_poly(), b in nonzero_poly()) {
            prop_assume!(a.order() < b.order());
            let (quot, rem) = a.divmod(&b).unwrap();
            prop_assert!(quot.is_zero());
            prop_assert_eq!(rem.coeffs(), a.coeffs());
        }

        #[test]
        fn division_by_zero_is_rejected(a in small_poly(), zeros in 0usize..4) {
            let zero = Polynomial::new(vec![Q::zero(); zeros]);
            prop_assert_eq!(a.divmod(&zero), Err(PolyError::DivisionByZero));
        }

        #[test]
        fn scalar_division_scales_coefficients(a in small_poly(), c in small_coeff()) {
            prop_assume!(!c.is_zero());
            let quot = a.floordiv(c.clone()).unwrap();
            let inv = unipoly_rings::Field::inv(&c).unwrap();
            prop_assert_eq!(quot, a.scale(&inv));
        }
    }
}
