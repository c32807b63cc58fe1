//! # unipoly-poly
//!
//! Dense univariate polynomials over a coefficient field.
//!
//! This crate provides:
//! - `Polynomial`, a coefficient vector stored exactly as constructed,
//!   with zero-extending access and point evaluation
//! - Coefficient-wise addition and subtraction, schoolbook multiplication
//! - Polynomial long division with quotient and remainder
//! - Unicode rendering such as `-3x² + 2x + 1`
//!
//! ## Operands
//!
//! Binary operations accept a polynomial or a bare coefficient through
//! [`Operand`]; a coefficient `c` behaves like the polynomial `[c]`.
//!
//! ```
//! use unipoly_poly::{divmod, Polynomial};
//! use unipoly_rings::Q;
//!
//! let p = Polynomial::<Q>::from_values([-10, -3, 1]);
//! let q = Polynomial::<Q>::from_values([2, 1]);
//! let (quot, rem) = divmod(&p, &q).unwrap();
//! assert_eq!(quot.to_string(), "x - 5");
//! assert_eq!(rem.to_string(), "0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod display;
pub mod division;
pub mod error;
pub mod operand;
mod ops;
pub mod polynomial;
pub mod range;

#[cfg(test)]
mod proptests;

pub use arith::{add, mul, sub};
pub use display::{ExponentStyle, FormatOptions, PolyFormatter};
pub use division::{divmod, floordiv, modulo};
pub use error::{PolyError, PolyResult};
pub use operand::Operand;
pub use polynomial::{coefficient_at, Polynomial};
pub use range::{CoeffIter, CoeffRange};
