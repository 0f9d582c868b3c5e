//! # skewer-rings
//!
//! Algebraic structures for the skewer solver.
//!
//! This crate provides:
//! - Abstract traits: `Ring` and `Field`
//! - The field of rationals `Q`, the coefficient field of every system
//!   the ray solver builds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{Field, Ring};
