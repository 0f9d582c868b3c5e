//! # skewer-integers
//!
//! Exact arithmetic for the skewer solver.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//!
//! Ray coordinates are parsed straight into `Integer`, so inputs that do not
//! fit a machine word are handled the same way as small ones.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

/// Error returned when a string is not a valid integer.
pub use dashu::base::error::ParseError;
pub use integer::Integer;
pub use rational::Rational;
