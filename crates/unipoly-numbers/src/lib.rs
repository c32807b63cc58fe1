//! # unipoly-numbers
//!
//! Exact rational arithmetic for unipoly coefficients.
//!
//! This crate wraps `dashu` to provide an arbitrary precision
//! `Rational` that never loses precision under field division,
//! so quotients produced by polynomial long division stay exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::Rational;
