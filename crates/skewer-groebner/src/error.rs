//! Errors raised while computing a Gröbner basis.

use thiserror::Error;

/// Failure modes of the Buchberger loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroebnerError {
    /// The generators use more variables than a monomial can hold.
    #[error("{num_vars} variables requested, at most {max} are supported")]
    TooManyVariables { num_vars: usize, max: usize },

    /// Two generators disagree on the number of variables.
    #[error("generator has {found} variables, expected {expected}")]
    MismatchedVariables { expected: usize, found: usize },

    /// The configured pair budget ran out before the basis was complete.
    #[error("gave up after reducing {limit} critical pairs")]
    PairLimitExceeded { limit: usize },
}
