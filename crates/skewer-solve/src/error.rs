//! Errors raised while solving polynomial systems.

use skewer_groebner::GroebnerError;
use thiserror::Error;

/// Failure to find the roots of a univariate polynomial exactly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RootError {
    /// The polynomial has roots, but they are not rational.
    #[error("degree {degree} polynomial has irrational roots")]
    Irrational { degree: usize },

    /// No exact root finder for this degree.
    #[error("cannot solve a degree {degree} polynomial exactly")]
    UnsupportedDegree { degree: usize },
}

/// Failure to solve a polynomial system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The Gröbner basis computation failed.
    #[error(transparent)]
    Groebner(#[from] GroebnerError),

    /// The equations contradict each other: the basis is `{1}`.
    #[error("the system is inconsistent")]
    Inconsistent,

    /// Some variable is left unconstrained, so there are infinitely many
    /// solutions.
    #[error("the solution set is infinite: variable {variable} is unconstrained")]
    PositiveDimensional { variable: usize },

    /// A univariate step could not be solved.
    #[error("cannot solve for variable {variable}")]
    Roots {
        variable: usize,
        #[source]
        source: RootError,
    },
}
