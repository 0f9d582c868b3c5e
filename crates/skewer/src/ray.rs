//! Rays: a starting point and a constant velocity.

use std::fmt;
use std::str::FromStr;

use skewer_integers::{Integer, Rational};

use crate::error::RayParseError;

/// A point moving with constant velocity, `position + t * velocity`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ray {
    /// Position at `t = 0`.
    pub position: [Integer; 3],
    /// Displacement per unit of time.
    pub velocity: [Integer; 3],
}

impl Ray {
    /// Creates a ray.
    pub fn new(position: [Integer; 3], velocity: [Integer; 3]) -> Self {
        Self { position, velocity }
    }

    /// Creates a ray from machine integers.
    pub fn from_i64(position: [i64; 3], velocity: [i64; 3]) -> Self {
        Self::new(position.map(Integer::new), velocity.map(Integer::new))
    }

    /// Returns the point reached at time `t`.
    pub fn point_at(&self, t: &Rational) -> [Rational; 3] {
        std::array::from_fn(|a| {
            Rational::from(&self.position[a]) + Rational::from(&self.velocity[a]) * t
        })
    }
}

impl FromStr for Ray {
    type Err = RayParseError;

    /// Parses `"px, py, pz @ vx, vy, vz"`. Whitespace around fields is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, velocity) = s.split_once('@').ok_or(RayParseError::MissingSeparator)?;
        Ok(Self::new(
            parse_triple(position, "position")?,
            parse_triple(velocity, "velocity")?,
        ))
    }
}

fn parse_triple(half: &str, name: &'static str) -> Result<[Integer; 3], RayParseError> {
    let tokens: Vec<&str> = half.split(',').map(str::trim).collect();
    let [a, b, c] = tokens[..] else {
        return Err(RayParseError::FieldCount {
            half: name,
            found: tokens.len(),
        });
    };

    let parse = |token: &str| {
        token
            .parse::<Integer>()
            .map_err(|source| RayParseError::InvalidInteger {
                token: token.to_string(),
                source,
            })
    };
    Ok([parse(a)?, parse(b)?, parse(c)?])
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [px, py, pz] = &self.position;
        let [vx, vy, vz] = &self.velocity;
        write!(f, "{px}, {py}, {pz} @ {vx}, {vy}, {vz}")
    }
}
