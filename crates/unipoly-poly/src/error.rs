//! Errors raised by polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// An operand was neither a coefficient nor a polynomial.
    #[error("unsupported operand type: {type_name}")]
    TypeMismatch {
        /// Name of the rejected type.
        type_name: &'static str,
    },

    /// The divisor has no nonzero coefficient.
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// A coefficient was requested at a negative index.
    #[error("coefficient index must be non-negative, got {0}")]
    NegativeIndex(isize),

    /// A coefficient range was requested with a step of zero.
    #[error("coefficient range step must be positive")]
    ZeroStep,
}

/// Result type for polynomial operations.
pub type PolyResult<T> = Result<T, PolyError>;
