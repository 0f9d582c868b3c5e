//! Monomial orderings for polynomial operations.
//!
//! The choice of monomial ordering decides which term of a polynomial leads,
//! and therefore the shape of a Gröbner basis.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::monomial::Monomial;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then uses reverse lex (last variable first)
    /// with the comparison reversed.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.cmp_lex(b),
            MonomialOrder::Grlex => a.cmp_grlex(b),
            MonomialOrder::Grevlex => a.cmp_grevlex(b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MonomialOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lex" => Ok(MonomialOrder::Lex),
            "grlex" => Ok(MonomialOrder::Grlex),
            "grevlex" => Ok(MonomialOrder::Grevlex),
            other => Err(format!(
                "unknown monomial order `{other}` (expected lex, grlex or grevlex)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_order() {
        let order = MonomialOrder::Lex;

        let x = Monomial::var(0, 2);
        let y = Monomial::var(1, 2);
        let y2 = y.mul(&y);

        assert_eq!(order.compare(&x, &y), Ordering::Greater);
        // x > y^2 in lex (first variable dominates)
        assert_eq!(order.compare(&x, &y2), Ordering::Greater);
    }

    #[test]
    fn test_grevlex_order() {
        let order = MonomialOrder::Grevlex;

        let x2 = Monomial::new(&[2, 0]);
        let xy = Monomial::new(&[1, 1]);
        let y2 = Monomial::new(&[0, 2]);
        let x = Monomial::var(0, 2);

        assert_eq!(order.compare(&x2, &xy), Ordering::Greater);
        assert_eq!(order.compare(&xy, &y2), Ordering::Greater);
        // Higher degree wins: xy > x
        assert_eq!(order.compare(&xy, &x), Ordering::Greater);
    }

    #[test]
    fn test_parse_roundtrip() {
        for order in [MonomialOrder::Lex, MonomialOrder::Grlex, MonomialOrder::Grevlex] {
            assert_eq!(order.to_string().parse::<MonomialOrder>(), Ok(order));
        }
        assert_eq!("GREVLEX".parse::<MonomialOrder>(), Ok(MonomialOrder::Grevlex));
        assert!("revlex".parse::<MonomialOrder>().is_err());
    }
}
