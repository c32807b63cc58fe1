//! # unipoly-rings
//!
//! Coefficient domains for unipoly.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `OrderedRing`
//! - Concrete fields: Q (exact rationals) and `Real` (`f64`)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Field
//!  └── OrderedRing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod reals;
pub mod traits;

pub use rationals::Q;
pub use reals::Real;
pub use traits::{Field, OrderedRing, Ring};
