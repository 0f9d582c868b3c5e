//! Gröbner bases by Buchberger's algorithm.
//!
//! This crate provides:
//! - Critical pairs with sugar degrees
//! - The product and chain criteria for discarding useless pairs
//! - Full reduction (normal forms) and S-polynomials
//! - A batched Buchberger loop whose S-polynomial reductions run in
//!   parallel via rayon, finishing with the unique reduced basis

pub mod buchberger;
pub mod criteria;
pub mod error;
pub mod pair;
pub mod reduce;

pub use buchberger::{groebner_basis, Buchberger, GroebnerConfig, GroebnerStats};
pub use error::GroebnerError;
pub use reduce::{normal_form, reduce_basis, s_polynomial};
