//! Critical pairs.

use skewer_poly::Monomial;

/// A pending S-polynomial between basis elements `i < j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriticalPair {
    /// Index of the first polynomial.
    pub i: usize,
    /// Index of the second polynomial.
    pub j: usize,
    /// `lcm(lm(f_i), lm(f_j))`.
    pub lcm: Monomial,
    /// Sugar degree of the S-polynomial.
    pub sugar: u32,
}

impl CriticalPair {
    /// Creates a pair, computing its lcm and sugar.
    ///
    /// The sugar is `max(sugar_i + deg(lcm / lm_i), sugar_j + deg(lcm / lm_j))`.
    pub fn new(
        i: usize,
        j: usize,
        lm_i: &Monomial,
        lm_j: &Monomial,
        sugar_i: u32,
        sugar_j: u32,
    ) -> Self {
        let (i, j, lm_i, lm_j, sugar_i, sugar_j) = if i < j {
            (i, j, lm_i, lm_j, sugar_i, sugar_j)
        } else {
            (j, i, lm_j, lm_i, sugar_j, sugar_i)
        };
        let lcm = lm_i.lcm(lm_j);
        let sugar = (sugar_i + lcm.total_degree() - lm_i.total_degree())
            .max(sugar_j + lcm.total_degree() - lm_j.total_degree());

        Self { i, j, lcm, sugar }
    }

    /// Returns the `(i, j)` index key, `i < j`.
    pub fn key(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

/// Normalises an index pair so the smaller index comes first.
pub fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_sugar() {
        // lm_i = x^2 (sugar 2), lm_j = x*y (sugar 3): lcm = x^2*y
        let a = Monomial::new(&[2, 0]);
        let b = Monomial::new(&[1, 1]);
        let pair = CriticalPair::new(4, 1, &a, &b, 2, 3);

        assert_eq!(pair.key(), (1, 4));
        assert_eq!(pair.lcm, Monomial::new(&[2, 1]));
        // max(3 + 1, 2 + 1)
        assert_eq!(pair.sugar, 4);
    }

    #[test]
    fn test_pair_key() {
        assert_eq!(pair_key(3, 1), (1, 3));
        assert_eq!(pair_key(1, 3), (1, 3));
    }
}
