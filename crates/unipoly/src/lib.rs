//! # Unipoly
//!
//! Univariate polynomials over a coefficient field.
//!
//! Unipoly stores a polynomial as a dense coefficient list, lowest exponent
//! first, and treats every missing coefficient as zero.
//!
//! ## Features
//!
//! - **Exact Coefficients**: Arbitrary precision rationals backed by `dashu`
//! - **Floating Point**: An `f64` field for approximate work
//! - **Ring Operations**: `+`, `-`, `*` with polynomials or scalars on either side
//! - **Long Division**: `divmod`, `floordiv` and `modulo` with a checked zero divisor
//! - **Rendering**: Configurable variable name and exponent notation
//!
//! ## Quick Start
//!
//! ```rust
//! use unipoly::prelude::*;
//!
//! // x² - 3x - 10
//! let p = Polynomial::<Q>::from_values([-10, -3, 1]);
//! assert_eq!(p.order(), 2);
//! assert_eq!(p.to_string(), "x² - 3x - 10");
//!
//! let (quot, rem) = p.divmod(&Polynomial::<Q>::from_values([2, 1])).unwrap();
//! assert_eq!(quot.to_string(), "x - 5");
//! assert!(rem.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use unipoly_numbers as numbers;
pub use unipoly_poly as poly;
pub use unipoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use unipoly_numbers::Rational;
    pub use unipoly_poly::{ExponentStyle, FormatOptions, Operand, PolyError, PolyResult, Polynomial};
    pub use unipoly_rings::{Field, OrderedRing, Ring, Q, Real};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_a_round_trip() {
        let p = Polynomial::<Q>::from_values([1, 2, 3]);
        let q = Polynomial::<Q>::from_values([0, 1]);
        let (quot, rem) = (&p * &q).divmod(&q).unwrap();
        assert_eq!(quot, p);
        assert!(rem.is_zero());
        assert_eq!(p.to_string(), "3x² + 2x + 1");
    }

    #[test]
    fn test_prelude_error_type() {
        let err: PolyResult<Polynomial<Real>> =
            Polynomial::<Real>::from_values([1.0]).floordiv(Real::new(0.0));
        assert_eq!(err, Err(PolyError::DivisionByZero));
    }
}
