//! Triangular decomposition and solution extraction.
//!
//! A lex Gröbner basis of a zero-dimensional ideal is triangular: grouping
//! its elements by leading variable gives, for the last variable, univariate
//! polynomials, for the one before it polynomials in two variables, and so
//! on up to the first. Solutions are found by solving for the last variable
//! and substituting back, one variable at a time.

use rustc_hash::FxHashMap;
use skewer_poly::{Monomial, SparsePoly};
use skewer_rings::traits::Ring;
use tracing::trace;

use crate::error::SolveError;
use crate::roots::UnivariateRoots;

/// A lex Gröbner basis grouped by leading variable.
#[derive(Clone, Debug)]
pub struct TriangularSystem<R: Ring> {
    /// `levels[v]` holds the basis elements whose leading variable is `x_v`.
    levels: Vec<Vec<SparsePoly<R>>>,
    num_vars: usize,
}

impl<R: Ring> TriangularSystem<R> {
    /// Groups a lex basis by leading variable.
    ///
    /// Constant elements carry no variable and are ignored; an inconsistent
    /// basis must be rejected before this point.
    pub fn from_lex_basis(basis: &[SparsePoly<R>], num_vars: usize) -> Self {
        let mut levels = vec![Vec::new(); num_vars];
        for poly in basis {
            if let Some(var) = poly.leading_monomial().and_then(Monomial::leading_variable) {
                levels[var].push(poly.clone());
            }
        }
        Self { levels, num_vars }
    }

    /// Returns the number of variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the basis elements with leading variable `x_var`.
    pub fn polys_for_var(&self, var: usize) -> &[SparsePoly<R>] {
        self.levels.get(var).map(Vec::as_slice).unwrap_or_default()
    }

    /// Checks if every variable has at least one polynomial.
    pub fn is_complete(&self) -> bool {
        self.levels.iter().all(|l| !l.is_empty())
    }
}

/// A solution point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<R> {
    /// Values for each variable.
    pub values: Vec<R>,
}

impl<R> Solution<R> {
    /// Creates a new solution.
    pub fn new(values: Vec<R>) -> Self {
        Self { values }
    }

    /// Returns the value for variable i.
    pub fn get(&self, i: usize) -> Option<&R> {
        self.values.get(i)
    }

    /// Returns the values, consuming the solution.
    pub fn into_values(self) -> Vec<R> {
        self.values
    }
}

/// Solves a triangular system by back-substitution.
///
/// Variables are solved from last to first. At each step the known values
/// are substituted into every polynomial of the current level; the lowest
/// degree non-vanishing result gives the candidate roots, and the others
/// must vanish at them. Solutions come out depth-first with roots ascending.
///
/// # Errors
///
/// Returns `PositiveDimensional` when a variable is left unconstrained and
/// `Roots` when a univariate step has no exact solution.
pub fn solve_triangular<R: UnivariateRoots>(
    system: &TriangularSystem<R>,
) -> Result<Vec<Solution<R>>, SolveError> {
    let mut solutions = Vec::new();
    let mut partial = vec![R::zero(); system.num_vars];
    extend(system, system.num_vars, &mut partial, &mut solutions)?;
    Ok(solutions)
}

/// Solves for `x_{remaining - 1}` given every later variable in `partial`.
fn extend<R: UnivariateRoots>(
    system: &TriangularSystem<R>,
    remaining: usize,
    partial: &mut [R],
    solutions: &mut Vec<Solution<R>>,
) -> Result<(), SolveError> {
    let Some(var) = remaining.checked_sub(1) else {
        solutions.push(Solution::new(partial.to_vec()));
        return Ok(());
    };

    let mut univariates: Vec<Vec<R>> = system
        .polys_for_var(var)
        .iter()
        .map(|p| substitute_partial(p, var, partial))
        .filter(|coeffs| !coeffs.is_empty())
        .collect();
    if univariates.is_empty() {
        return Err(SolveError::PositiveDimensional { variable: var });
    }

    univariates.sort_by_key(Vec::len);
    let (lowest, others) = univariates.split_at(1);
    let roots =
        R::roots(&lowest[0]).map_err(|source| SolveError::Roots { variable: var, source })?;
    trace!(variable = var, degree = lowest[0].len() - 1, roots = roots.len(), "back-substitution");

    for root in roots {
        if others.iter().all(|c| evaluate_univariate(c, &root).is_zero()) {
            partial[var] = root;
            extend(system, var, partial, solutions)?;
        }
    }
    Ok(())
}

/// Substitutes the known values of `x_{var+1}, ...` into `poly`.
///
/// Returns the dense coefficients of the univariate result in `x_var`,
/// lowest degree first, with trailing zeros trimmed. A polynomial that
/// vanishes identically gives an empty vector.
pub fn substitute_partial<R: Ring>(poly: &SparsePoly<R>, var: usize, values: &[R]) -> Vec<R> {
    let mut by_degree: FxHashMap<u16, R> = FxHashMap::default();
    for (m, c) in poly.terms() {
        let coeff = m
            .exponents()
            .iter()
            .enumerate()
            .skip(var + 1)
            .filter(|&(_, &e)| e > 0)
            .fold(c.clone(), |acc, (j, &e)| acc * values[j].pow(u32::from(e)));
        let slot = by_degree.entry(m.exponent(var)).or_insert_with(R::zero);
        *slot = slot.clone() + coeff;
    }

    let degree = by_degree
        .iter()
        .filter(|(_, c)| !c.is_zero())
        .map(|(&d, _)| usize::from(d))
        .max();
    let Some(degree) = degree else {
        return Vec::new();
    };

    let mut coeffs = vec![R::zero(); degree + 1];
    for (d, c) in by_degree {
        if usize::from(d) <= degree {
            coeffs[usize::from(d)] = c;
        }
    }
    coeffs
}

/// Evaluates dense univariate coefficients at `x` by Horner's rule.
fn evaluate_univariate<R: Ring>(coeffs: &[R], x: &R) -> R {
    coeffs
        .iter()
        .rev()
        .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
}

/// Checks that `solution` is a common zero of `generators`.
pub fn verify<R: Ring>(generators: &[SparsePoly<R>], solution: &Solution<R>) -> bool {
    generators
        .iter()
        .all(|g| g.evaluate(&solution.values).is_zero())
}
