//! Criteria for discarding critical pairs, and pair selection.
//!
//! Both criteria identify S-polynomials that are guaranteed to reduce to
//! zero, so the Buchberger loop never spends a reduction on them.

use rustc_hash::FxHashSet;
use skewer_poly::{Monomial, MonomialOrder, SparsePoly};
use skewer_rings::traits::Ring;

use crate::pair::{pair_key, CriticalPair};

/// Checks Buchberger's first criterion (product criterion).
///
/// If `lm(f)` and `lm(g)` are coprime, `S(f, g)` reduces to zero.
pub fn product_criterion(lm_f: &Monomial, lm_g: &Monomial) -> bool {
    lm_f.is_coprime(lm_g)
}

/// Checks the chain criterion (Buchberger's second criterion).
///
/// The pair `(i, j)` is redundant if some other basis element `h_k` has
/// `lm(h_k) | lcm(lm(f_i), lm(f_j))` while neither `(i, k)` nor `(j, k)` is
/// still pending. `retired` holds every pair that is no longer pending.
pub fn chain_criterion<R: Ring>(
    pair: &CriticalPair,
    basis: &[SparsePoly<R>],
    retired: &FxHashSet<(usize, usize)>,
) -> bool {
    basis.iter().enumerate().any(|(k, h)| {
        if k == pair.i || k == pair.j {
            return false;
        }
        let Some(lm_h) = h.leading_monomial() else {
            return false;
        };

        pair.lcm.is_divisible_by(lm_h)
            && retired.contains(&pair_key(pair.i, k))
            && retired.contains(&pair_key(pair.j, k))
    })
}

/// Removes and returns the next batch of pairs (the "normal" sugar strategy).
///
/// Pairs are ordered by sugar, then by the ordering of their lcm. The batch
/// holds pairs of the minimal sugar only, at most `batch_size` of them.
pub fn sugar_selection(
    pairs: &mut Vec<CriticalPair>,
    order: MonomialOrder,
    batch_size: usize,
) -> Vec<CriticalPair> {
    if pairs.is_empty() {
        return Vec::new();
    }

    pairs.sort_by(|a, b| {
        a.sugar
            .cmp(&b.sugar)
            .then_with(|| order.compare(&a.lcm, &b.lcm))
            .then_with(|| a.key().cmp(&b.key()))
    });

    let min_sugar = pairs[0].sugar;
    let take = pairs
        .iter()
        .take(batch_size.max(1))
        .take_while(|p| p.sugar == min_sugar)
        .count();

    pairs.drain(..take).collect()
}
