//! Monomials over a fixed, small number of variables.
//!
//! Exponents live inline in a fixed array so monomials are `Copy` and
//! comparison never allocates.

use std::cmp::Ordering;
use std::fmt;

/// Maximum number of variables a monomial can carry.
pub const MAX_VARS: usize = 16;

/// A monomial `x_0^e_0 * x_1^e_1 * ... * x_{n-1}^e_{n-1}`.
///
/// The total degree is cached for the graded orderings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Monomial {
    exponents: [u16; MAX_VARS],
    num_vars: u8,
    total_degree: u32,
}

impl Monomial {
    /// Creates a monomial from its exponents.
    ///
    /// # Panics
    ///
    /// Panics if more than `MAX_VARS` exponents are given.
    #[must_use]
    pub fn new(exps: &[u16]) -> Self {
        assert!(exps.len() <= MAX_VARS, "at most {MAX_VARS} variables are supported");
        let mut exponents = [0u16; MAX_VARS];
        exponents[..exps.len()].copy_from_slice(exps);

        Self {
            exponents,
            num_vars: exps.len() as u8,
            total_degree: exps.iter().map(|&e| u32::from(e)).sum(),
        }
    }

    /// Creates the identity monomial (1).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        assert!(num_vars <= MAX_VARS, "at most {MAX_VARS} variables are supported");
        Self {
            exponents: [0u16; MAX_VARS],
            num_vars: num_vars as u8,
            total_degree: 0,
        }
    }

    /// Creates the monomial `x_i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range");
        let mut m = Self::one(num_vars);
        m.exponents[i] = 1;
        m.total_degree = 1;
        m
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u16 {
        self.exponents.get(i).copied().unwrap_or(0)
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn exponents(&self) -> &[u16] {
        &self.exponents[..self.num_vars as usize]
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars as usize
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.total_degree
    }

    /// Checks if this is the identity monomial (1).
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.total_degree == 0
    }

    /// Returns the first variable with a non-zero exponent.
    ///
    /// Under lex order this is the variable a polynomial "eliminates".
    #[must_use]
    pub fn leading_variable(&self) -> Option<usize> {
        self.exponents().iter().position(|&e| e > 0)
    }

    /// Multiplies two monomials.
    ///
    /// Exponents add exactly; the cached degree is the sum of the two
    /// cached degrees, which equals the sum of the new exponents.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut exponents = [0u16; MAX_VARS];
        for (e, (a, b)) in exponents
            .iter_mut()
            .zip(self.exponents.iter().zip(&other.exponents))
        {
            *e = a + b;
        }

        Self {
            exponents,
            num_vars: self.num_vars.max(other.num_vars),
            total_degree: self.total_degree + other.total_degree,
        }
    }

    /// Divides this monomial by another.
    ///
    /// Returns `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !self.is_divisible_by(other) {
            return None;
        }

        let mut exponents = [0u16; MAX_VARS];
        for (e, (a, b)) in exponents
            .iter_mut()
            .zip(self.exponents.iter().zip(&other.exponents))
        {
            *e = a - b;
        }

        Some(Self {
            exponents,
            num_vars: self.num_vars.max(other.num_vars),
            total_degree: self.total_degree - other.total_degree,
        })
    }

    /// Returns true if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(a, b)| a >= b)
    }

    /// Returns true if the two monomials share no variable.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(&a, &b)| a == 0 || b == 0)
    }

    /// Computes the least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let mut exponents = [0u16; MAX_VARS];
        for (e, (a, b)) in exponents
            .iter_mut()
            .zip(self.exponents.iter().zip(&other.exponents))
        {
            *e = (*a).max(*b);
        }

        Self {
            exponents,
            num_vars: self.num_vars.max(other.num_vars),
            total_degree: exponents.iter().map(|&e| u32::from(e)).sum(),
        }
    }

    /// Lexicographic comparison: the first differing exponent decides.
    #[must_use]
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        self.exponents.cmp(&other.exponents)
    }

    /// Graded lexicographic comparison.
    #[must_use]
    pub fn cmp_grlex(&self, other: &Self) -> Ordering {
        self.total_degree
            .cmp(&other.total_degree)
            .then_with(|| self.cmp_lex(other))
    }

    /// Graded reverse lexicographic comparison.
    ///
    /// Ties in total degree go to the monomial with the smaller exponent in
    /// the last variable where the two differ.
    #[must_use]
    pub fn cmp_grevlex(&self, other: &Self) -> Ordering {
        self.total_degree.cmp(&other.total_degree).then_with(|| {
            for i in (0..MAX_VARS).rev() {
                match other.exponents[i].cmp(&self.exponents[i]) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        })
    }

    /// Formats the monomial with the given variable names.
    ///
    /// Variables without a name fall back to `x{i}`.
    #[must_use]
    pub fn format_with(&self, names: &[&str]) -> String {
        let parts: Vec<String> = self
            .exponents()
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = names
                    .get(i)
                    .map_or_else(|| format!("x{i}"), |n| (*n).to_string());
                if e == 1 {
                    name
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monomial({:?})", self.exponents())
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(&[]))
    }
}
