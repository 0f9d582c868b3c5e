//! Sparse multivariate polynomials.
//!
//! Polynomials are kept as a list of non-zero terms sorted by a monomial
//! ordering, leading term first. That is the shape Gröbner basis reduction
//! consumes: the leading term is always `terms()[0]`.

use std::fmt;

use skewer_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly<R: Ring> {
    /// Terms in descending order under `order`, no zero coefficients.
    terms: Vec<(Monomial, R)>,
    /// Number of variables.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are sorted, like terms are combined and zeros are dropped.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize, order: MonomialOrder) -> Self {
        Self::constant(R::one(), num_vars, order)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        if c.is_zero() {
            Self::zero(num_vars, order)
        } else {
            Self {
                terms: vec![(Monomial::one(num_vars), c)],
                num_vars,
                order,
            }
        }
    }

    /// Creates a single variable x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: vec![(Monomial::var(i, num_vars), R::one())],
            num_vars,
            order,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is a non-zero constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0.is_one()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Consumes the polynomial and returns its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<(Monomial, R)> {
        self.terms
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the leading term (monomial, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Returns the polynomial without its leading term.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            terms: self.terms.iter().skip(1).cloned().collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        let order = self.order;
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut merged: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last, acc)) if *last == m => *acc = acc.clone() + c,
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());
        self.terms = merged;
    }

    /// Returns the same polynomial sorted under another ordering.
    #[must_use]
    pub fn with_order(&self, order: MonomialOrder) -> Self {
        if order == self.order {
            return self.clone();
        }
        Self::new(self.terms.clone(), self.num_vars, order)
    }

    /// Adds two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the variable count or ordering differ.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);
        assert_eq!(self.order, other.order);

        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());

        Self::new(terms, self.num_vars, self.order)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (*m, -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// # Panics
    ///
    /// Panics if the variable count or ordering differ.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);
        assert_eq!(self.order, other.order);

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms, self.num_vars, self.order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, x)| (*m, x.clone() * c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies by the term `c * m`.
    ///
    /// Monomial orderings are compatible with multiplication, so the terms
    /// stay sorted without another pass.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Returns true if variable `i` appears in some term.
    #[must_use]
    pub fn contains_var(&self, i: usize) -> bool {
        self.terms.iter().any(|(m, _)| m.exponent(i) > 0)
    }

    /// Evaluates the polynomial at a point.
    ///
    /// # Panics
    ///
    /// Panics if `point` has fewer entries than the polynomial has variables.
    #[must_use]
    pub fn evaluate(&self, point: &[R]) -> R {
        assert!(point.len() >= self.num_vars, "point has too few coordinates");
        self.terms.iter().fold(R::zero(), |acc, (m, c)| {
            let term = m
                .exponents()
                .iter()
                .enumerate()
                .filter(|&(_, &e)| e > 0)
                .fold(c.clone(), |t, (i, &e)| t * point[i].pow(u32::from(e)));
            acc + term
        })
    }
}

impl<R: Field> SparsePoly<R> {
    /// Scales the polynomial so that its leading coefficient is one.
    #[must_use]
    pub fn make_monic(&self) -> Self {
        match self.leading_coeff().and_then(|c| c.inv()) {
            Some(inv) if !inv.is_one() => self.scale(&inv),
            _ => self.clone(),
        }
    }
}

impl<R: Ring + fmt::Display> SparsePoly<R> {
    /// Formats the polynomial with the given variable names.
    #[must_use]
    pub fn format_with(&self, names: &[&str]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        self.terms
            .iter()
            .map(|(m, c)| {
                if m.is_one() {
                    format!("{c}")
                } else if c.is_one() {
                    m.format_with(names)
                } else {
                    format!("{c}*{}", m.format_with(names))
                }
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl<R: Ring + fmt::Display> fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skewer_rings::rationals::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_sparse_basic() {
        let order = MonomialOrder::Grevlex;
        let x = SparsePoly::<Q>::var(0, 2, order);
        let y = SparsePoly::<Q>::var(1, 2, order);

        let sum = x.add(&y);
        assert_eq!(sum.len(), 2);
        assert!(sum.sub(&x).sub(&y).is_zero());
    }

    #[test]
    fn test_sparse_mul() {
        let order = MonomialOrder::Grevlex;
        let x = SparsePoly::<Q>::var(0, 2, order);
        let one = SparsePoly::constant(q(1), 2, order);

        // (x + 1)^2 = x^2 + 2x + 1
        let xp1 = x.add(&one);
        let sq = xp1.mul(&xp1);
        assert_eq!(sq.len(), 3);
        assert_eq!(sq.leading_monomial(), Some(&Monomial::new(&[2, 0])));
        assert_eq!(sq.terms()[1].1, q(2));
    }

    #[test]
    fn test_leading_term_follows_order() {
        // y^2 + x under lex leads with x, under grevlex with y^2
        let terms = vec![
            (Monomial::new(&[0, 2]), q(1)),
            (Monomial::new(&[1, 0]), q(1)),
        ];
        let lex = SparsePoly::new(terms.clone(), 2, MonomialOrder::Lex);
        let grevlex = SparsePoly::new(terms, 2, MonomialOrder::Grevlex);

        assert_eq!(lex.leading_monomial(), Some(&Monomial::new(&[1, 0])));
        assert_eq!(grevlex.leading_monomial(), Some(&Monomial::new(&[0, 2])));
        assert_eq!(grevlex.with_order(MonomialOrder::Lex), lex);
    }

    #[test]
    fn test_like_terms_cancel() {
        let terms = vec![
            (Monomial::new(&[1, 1]), q(3)),
            (Monomial::new(&[0, 0]), q(5)),
            (Monomial::new(&[1, 1]), q(-3)),
        ];
        let p = SparsePoly::new(terms, 2, MonomialOrder::Grevlex);
        assert!(p.is_constant());
        assert_eq!(p.leading_coeff(), Some(&q(5)));
    }

    #[test]
    fn test_make_monic() {
        let p = SparsePoly::new(
            vec![(Monomial::new(&[1, 0]), q(49)), (Monomial::one(2), q(-948))],
            2,
            MonomialOrder::Lex,
        );
        let monic = p.make_monic();
        assert_eq!(monic.leading_coeff(), Some(&q(1)));
        assert_eq!(monic.terms()[1].1, Q::new(-948, 49));
    }

    #[test]
    fn test_evaluate() {
        // 2*x*y - y + 7 at (3, -2) = -12 + 2 + 7 = -3
        let p = SparsePoly::new(
            vec![
                (Monomial::new(&[1, 1]), q(2)),
                (Monomial::new(&[0, 1]), q(-1)),
                (Monomial::one(2), q(7)),
            ],
            2,
            MonomialOrder::Grevlex,
        );
        assert_eq!(p.evaluate(&[q(3), q(-2)]), q(-3));
    }

    #[test]
    fn test_format_with_names() {
        let p = SparsePoly::new(
            vec![
                (Monomial::new(&[0, 1, 1]), q(-1)),
                (Monomial::new(&[1, 0, 0]), q(1)),
                (Monomial::one(3), q(19)),
            ],
            3,
            MonomialOrder::Grevlex,
        );
        assert_eq!(p.format_with(&["x", "t1", "vx"]), "-1*t1*vx + x + 19");
    }
}
