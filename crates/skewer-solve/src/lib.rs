//! Polynomial system solving for skewer.
//!
//! Solves zero-dimensional systems with exact rational solutions:
//!
//! 1. Gröbner basis in a cheap ordering (grevlex by default)
//! 2. Conversion to a lex basis by running Buchberger again in lex
//! 3. **Triangular decomposition**: group the lex basis by leading variable
//! 4. Back-substitution with exact univariate root finding
//!
//! # Example
//!
//! ```
//! use skewer_poly::{Monomial, MonomialOrder, SparsePoly};
//! use skewer_rings::Q;
//! use skewer_solve::{solve_system, SolveConfig};
//!
//! let order = MonomialOrder::Grevlex;
//! let mono = |e: &[u16]| Monomial::new(e);
//!
//! // x + y - 2 = 0, x - y = 0
//! let system = vec![
//!     SparsePoly::new(
//!         vec![(mono(&[1, 0]), Q::from_integer(1)), (mono(&[0, 1]), Q::from_integer(1)), (mono(&[0, 0]), Q::from_integer(-2))],
//!         2,
//!         order,
//!     ),
//!     SparsePoly::new(
//!         vec![(mono(&[1, 0]), Q::from_integer(1)), (mono(&[0, 1]), Q::from_integer(-1))],
//!         2,
//!         order,
//!     ),
//! ];
//!
//! let solutions = solve_system(&system, &SolveConfig::default()).unwrap();
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(solutions[0].values, vec![Q::from_integer(1), Q::from_integer(1)]);
//! ```

pub mod error;
pub mod roots;
pub mod triangular;

use skewer_groebner::{groebner_basis, GroebnerConfig};
use skewer_poly::{MonomialOrder, SparsePoly};
use tracing::debug;

pub use error::{RootError, SolveError};
pub use roots::UnivariateRoots;
pub use triangular::{solve_triangular, substitute_partial, verify, Solution, TriangularSystem};

/// Configuration for [`solve_system`].
#[derive(Clone, Debug)]
pub struct SolveConfig {
    /// Ordering of the first Gröbner basis; lex skips the conversion.
    pub initial_order: MonomialOrder,
    /// Pairs reduced per Buchberger batch.
    pub batch_size: usize,
    /// Pair budget of each Buchberger run (0 = no limit).
    pub max_pairs: usize,
    /// Whether Buchberger batches run on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        let groebner = GroebnerConfig::default();
        Self {
            initial_order: groebner.order,
            batch_size: groebner.batch_size,
            max_pairs: groebner.max_pairs,
            parallel: groebner.parallel,
        }
    }
}

impl SolveConfig {
    /// Returns the Buchberger settings for a run in `order`.
    pub fn groebner_config(&self, order: MonomialOrder) -> GroebnerConfig {
        GroebnerConfig {
            order,
            batch_size: self.batch_size,
            max_pairs: self.max_pairs,
            parallel: self.parallel,
        }
    }
}

/// Finds every solution of `generators = 0`.
///
/// Solutions are verified against the generators and returned depth-first
/// from the last variable, with roots ascending at each level.
///
/// # Errors
///
/// - `Inconsistent` if the system has no solution at all, even complex
/// - `PositiveDimensional` if it has infinitely many
/// - `Roots` if a coordinate is not rational
/// - `Groebner` if a basis computation fails
pub fn solve_system<R: UnivariateRoots + Send + Sync>(
    generators: &[SparsePoly<R>],
    config: &SolveConfig,
) -> Result<Vec<Solution<R>>, SolveError> {
    let num_vars = generators.first().map_or(0, SparsePoly::num_vars);

    let basis = groebner_basis(
        generators.to_vec(),
        &config.groebner_config(config.initial_order),
    )?;
    if basis.iter().any(SparsePoly::is_constant) {
        return Err(SolveError::Inconsistent);
    }
    debug!(order = %config.initial_order, size = basis.len(), "initial basis");

    let lex = if config.initial_order == MonomialOrder::Lex {
        basis
    } else {
        let lex = groebner_basis(basis, &config.groebner_config(MonomialOrder::Lex))?;
        debug!(size = lex.len(), "lex basis");
        lex
    };

    let system = TriangularSystem::from_lex_basis(&lex, num_vars);
    let candidates = solve_triangular(&system)?;
    let found = candidates.len();
    let solutions: Vec<Solution<R>> = candidates
        .into_iter()
        .filter(|s| verify(generators, s))
        .collect();
    debug!(candidates = found, solutions = solutions.len(), "solved");

    Ok(solutions)
}
