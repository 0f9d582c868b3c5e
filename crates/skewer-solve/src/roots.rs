//! Exact roots of univariate polynomials.

use skewer_rings::traits::{Field, Ring};
use skewer_rings::Q;

use crate::error::RootError;

/// Fields whose univariate polynomials can be solved exactly.
pub trait UnivariateRoots: Field + Ord {
    /// Returns the distinct roots in the field, in ascending order.
    ///
    /// `coeffs[k]` is the coefficient of `x^k`. The zero polynomial has no
    /// meaningful root set; callers must not pass it.
    ///
    /// # Errors
    ///
    /// Returns an error when roots exist outside the field or the degree is
    /// beyond what the implementation can solve.
    fn roots(coeffs: &[Self]) -> Result<Vec<Self>, RootError>;
}

impl UnivariateRoots for Q {
    fn roots(coeffs: &[Self]) -> Result<Vec<Self>, RootError> {
        let top = coeffs.iter().rposition(|c| !c.is_zero()).map_or(0, |i| i + 1);
        let coeffs = &coeffs[..top];

        // Factor out x^k.
        let low = coeffs.iter().position(|c| !c.is_zero()).unwrap_or(coeffs.len());
        let reduced = &coeffs[low..];

        let mut roots = match reduced.len().saturating_sub(1) {
            0 => Vec::new(),
            1 => vec![-reduced[0].field_div(&reduced[1])],
            2 => quadratic_roots(&reduced[2], &reduced[1], &reduced[0])?,
            degree => return Err(RootError::UnsupportedDegree { degree }),
        };

        if low > 0 {
            roots.push(Q::zero());
        }
        roots.sort();
        roots.dedup();
        Ok(roots)
    }
}

/// Roots of `a x^2 + b x + c` with `a != 0` and `c != 0`.
fn quadratic_roots(a: &Q, b: &Q, c: &Q) -> Result<Vec<Q>, RootError> {
    let four = Q::from_integer(4);
    let disc = b.clone() * b.clone() - four * a.clone() * c.clone();
    if disc.0.is_negative() {
        return Ok(Vec::new());
    }
    let sqrt = disc
        .0
        .exact_sqrt()
        .map(Q)
        .ok_or(RootError::Irrational { degree: 2 })?;

    let two_a = Q::from_integer(2) * a.clone();
    let minus_b = -b.clone();
    Ok(vec![
        (minus_b.clone() - sqrt.clone()).field_div(&two_a),
        (minus_b + sqrt).field_div(&two_a),
    ])
}
