//! Algebraic structure traits.
//!
//! Polynomials, Gröbner bases and the triangular solver are generic over
//! these traits; the rest of the workspace instantiates them with `Q`.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Raises to a power by square-and-multiply.
    ///
    /// Monomial evaluation calls this once per variable, so exponents stay
    /// as small as the polynomial degrees.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }
        result
    }
}

/// A ring in which every non-zero element is invertible.
///
/// Buchberger's algorithm needs this to make leading coefficients one.
pub trait Field: Ring {
    /// The multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// `self / other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero. Callers only divide by leading
    /// coefficients, which are never zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}
