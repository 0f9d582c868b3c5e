//! The nine interception equations.
//!
//! The unknown line meets ray `i` at time `t_i`:
//!
//! ```text
//! P_i[a] + V_i[a] * t_i = x[a] + t_i * v[a]      for i in 1..=3, a in {x, y, z}
//! ```
//!
//! Each equation is turned into the polynomial
//! `P_i[a] + V_i[a] t_i - x_a - t_i v_a` over the unknowns
//! `x, y, z, t1, t2, t3, vx, vy, vz`, in that order.

use skewer_poly::{Monomial, MonomialOrder, SparsePoly};
use skewer_rings::Q;

use crate::ray::Ray;

/// Number of unknowns in the system.
pub const NUM_UNKNOWNS: usize = 9;

/// Variable names, indexed like [`Unknown`].
pub const UNKNOWN_NAMES: [&str; NUM_UNKNOWNS] = ["x", "y", "z", "t1", "t2", "t3", "vx", "vy", "vz"];

/// An unknown of the interception system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unknown {
    X,
    Y,
    Z,
    T1,
    T2,
    T3,
    Vx,
    Vy,
    Vz,
}

impl Unknown {
    /// Every unknown in variable order.
    pub const ALL: [Unknown; NUM_UNKNOWNS] = [
        Unknown::X,
        Unknown::Y,
        Unknown::Z,
        Unknown::T1,
        Unknown::T2,
        Unknown::T3,
        Unknown::Vx,
        Unknown::Vy,
        Unknown::Vz,
    ];

    /// Position coordinate along `axis` (0, 1 or 2).
    pub fn position(axis: usize) -> Self {
        Self::ALL[axis]
    }

    /// Meeting time with ray `ray` (0, 1 or 2).
    pub fn time(ray: usize) -> Self {
        Self::ALL[3 + ray]
    }

    /// Velocity component along `axis` (0, 1 or 2).
    pub fn velocity(axis: usize) -> Self {
        Self::ALL[6 + axis]
    }

    /// Polynomial variable index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        UNKNOWN_NAMES[self.index()]
    }

    /// Returns the unknown with the given variable index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

fn var(u: Unknown) -> Monomial {
    Monomial::var(u.index(), NUM_UNKNOWNS)
}

/// Builds `P_i[a] + V_i[a] t_i - x_a - t_i v_a` for every ray `i` and axis `a`.
///
/// Equations come ray by ray, axis by axis. They are sorted in grevlex; the
/// solver re-sorts them into whatever ordering it runs in.
pub fn intercept_equations(rays: &[Ray; 3]) -> Vec<SparsePoly<Q>> {
    let minus_one = Q::from_integer(-1);

    rays.iter()
        .enumerate()
        .flat_map(|(i, ray)| (0..3).map(move |a| (i, ray, a)))
        .map(|(i, ray, a)| {
            let t = var(Unknown::time(i));
            let terms = vec![
                (Monomial::one(NUM_UNKNOWNS), Q::from(&ray.position[a])),
                (t, Q::from(&ray.velocity[a])),
                (var(Unknown::position(a)), minus_one.clone()),
                (t.mul(&var(Unknown::velocity(a))), minus_one.clone()),
            ];
            SparsePoly::new(terms, NUM_UNKNOWNS, MonomialOrder::Grevlex)
        })
        .collect()
}
