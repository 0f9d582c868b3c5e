//! # skewer-poly
//!
//! Sparse multivariate polynomial arithmetic.
//!
//! This crate provides:
//! - Fixed-capacity monomials with cached total degree
//! - The lex, grlex and grevlex monomial orderings
//! - Sparse polynomials kept sorted by their ordering, leading term first

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use monomial::{Monomial, MAX_VARS};
pub use ordering::MonomialOrder;
pub use sparse::SparsePoly;
