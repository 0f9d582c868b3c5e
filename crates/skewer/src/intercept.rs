//! Solving for the lines that meet all three rays.

use std::fmt;
use std::io::{self, Write};

use skewer_integers::Rational;
use skewer_rings::Q;
use skewer_solve::{solve_system, Solution, SolveConfig};
use tracing::{debug, trace, warn};

use crate::equations::{intercept_equations, Unknown, UNKNOWN_NAMES};
use crate::error::{Result, SkewerError};
use crate::ray::Ray;

/// A line that meets each of the three rays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interception {
    /// Position of the line at `t = 0`.
    pub position: [Rational; 3],
    /// Velocity of the line.
    pub velocity: [Rational; 3],
    /// Time at which the line meets each ray.
    pub times: [Rational; 3],
}

impl Interception {
    fn from_solution(solution: &Solution<Q>) -> Self {
        let value = |u: Unknown| {
            solution
                .get(u.index())
                .map(|q| q.as_inner().clone())
                .unwrap_or_default()
        };
        Self {
            position: std::array::from_fn(|a| value(Unknown::position(a))),
            velocity: std::array::from_fn(|a| value(Unknown::velocity(a))),
            times: std::array::from_fn(|i| value(Unknown::time(i))),
        }
    }

    /// Returns `x + y + z`.
    pub fn position_sum(&self) -> Rational {
        self.position.iter().cloned().sum()
    }

    /// Returns the point on the line at time `t`.
    pub fn point_at(&self, t: &Rational) -> [Rational; 3] {
        std::array::from_fn(|a| self.position[a].clone() + self.velocity[a].clone() * t)
    }

    /// Checks that the line and `ray` are at the same point at `times[index]`.
    pub fn meets(&self, ray: &Ray, index: usize) -> bool {
        let t = &self.times[index];
        self.point_at(t) == ray.point_at(t)
    }
}

impl fmt::Display for Interception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = &self.position;
        let [vx, vy, vz] = &self.velocity;
        let [t1, t2, t3] = &self.times;
        write!(f, "{x}, {y}, {z} @ {vx}, {vy}, {vz} (t = {t1}, {t2}, {t3})")
    }
}

/// Finds every line that meets the three rays.
///
/// Solutions come in the solver's deterministic order.
///
/// # Errors
///
/// `NoSolution` if the equations have no rational solution, `Solve` if
/// the solver fails (inconsistent system, infinitely many lines, or
/// irrational coordinates).
pub fn find_interceptions(rays: &[Ray; 3], config: &SolveConfig) -> Result<Vec<Interception>> {
    let equations = intercept_equations(rays);
    for eq in &equations {
        trace!(equation = %eq.format_with(&UNKNOWN_NAMES), "built");
    }

    let solutions = solve_system(&equations, config)?;
    debug!(solutions = solutions.len(), "solved interception system");
    interceptions_from(&solutions)
}

fn interceptions_from(solutions: &[Solution<Q>]) -> Result<Vec<Interception>> {
    if solutions.is_empty() {
        return Err(SkewerError::NoSolution);
    }
    Ok(solutions.iter().map(Interception::from_solution).collect())
}

/// Returns true when two of the lines have different position sums.
pub fn sums_disagree(lines: &[Interception]) -> bool {
    match lines.split_first() {
        Some((first, rest)) => {
            let sum = first.position_sum();
            rest.iter().any(|line| line.position_sum() != sum)
        }
        None => false,
    }
}

/// Writes the position sum of each line, one per output line.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_sums<W: Write>(out: &mut W, lines: &[Interception]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.position_sum())?;
    }
    Ok(())
}

/// Returns the first line that meets the three rays.
///
/// Logs a warning when several lines exist and their position sums differ.
///
/// # Errors
///
/// See [`find_interceptions`].
pub fn first_interception(rays: &[Ray; 3], config: &SolveConfig) -> Result<Interception> {
    let all = find_interceptions(rays, config)?;
    if sums_disagree(&all) {
        warn!(
            solutions = all.len(),
            "lines disagree on the position sum; using the first"
        );
    }

    // find_interceptions never returns an empty list
    all.into_iter().next().ok_or(SkewerError::NoSolution)
}
