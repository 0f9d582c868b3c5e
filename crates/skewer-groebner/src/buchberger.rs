//! The batched Buchberger loop.
//!
//! Pairs are selected with the normal sugar strategy. Every batch of
//! S-polynomials is reduced against an immutable snapshot of the basis (in
//! parallel when enabled), then merged sequentially in batch order: each
//! remainder is reduced again against the grown basis before it is added, so
//! the outcome never depends on thread scheduling.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use skewer_poly::{MonomialOrder, SparsePoly, MAX_VARS};
use skewer_rings::traits::Field;
use tracing::{debug, trace};

use crate::criteria::{chain_criterion, product_criterion, sugar_selection};
use crate::error::GroebnerError;
use crate::pair::CriticalPair;
use crate::reduce::{normal_form, reduce_basis, s_polynomial};

/// Configuration for the Buchberger algorithm.
#[derive(Clone, Debug)]
pub struct GroebnerConfig {
    /// Monomial ordering of the basis.
    pub order: MonomialOrder,
    /// Maximum number of pairs reduced per batch.
    pub batch_size: usize,
    /// Maximum number of pairs to reduce in total (0 = no limit).
    pub max_pairs: usize,
    /// Whether batches are reduced on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GroebnerConfig {
    fn default() -> Self {
        Self {
            order: MonomialOrder::Grevlex,
            batch_size: 100,
            max_pairs: 0,
            parallel: true,
        }
    }
}

/// Counters collected during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroebnerStats {
    /// S-polynomials actually reduced.
    pub pairs_reduced: usize,
    /// Reductions that ended in zero.
    pub zero_reductions: usize,
    /// Pairs discarded by the product criterion.
    pub product_skipped: usize,
    /// Pairs discarded by the chain criterion.
    pub chain_skipped: usize,
    /// Number of batches processed.
    pub batches: usize,
    /// Largest basis size reached before the final reduction.
    pub max_basis_size: usize,
}

/// State of a Buchberger computation.
pub struct Buchberger<R: Field> {
    /// Basis so far; indices are stable, elements are never removed.
    basis: Vec<SparsePoly<R>>,
    /// Sugar degree of every basis element.
    sugars: Vec<u32>,
    /// Pending pairs.
    pairs: Vec<CriticalPair>,
    /// Pairs that are no longer pending (reduced or discarded).
    retired: FxHashSet<(usize, usize)>,
    /// A nonzero constant showed up: the ideal is the whole ring.
    inconsistent: bool,
    num_vars: usize,
    config: GroebnerConfig,
    stats: GroebnerStats,
}

impl<R: Field + Send + Sync> Buchberger<R> {
    /// Sets up the computation for `generators`.
    ///
    /// Generators are re-sorted into `config.order` and made monic; zero
    /// generators are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the generators use too many variables or
    /// disagree on the number of variables.
    pub fn new(generators: Vec<SparsePoly<R>>, config: GroebnerConfig) -> Result<Self, GroebnerError> {
        let num_vars = generators.first().map_or(0, SparsePoly::num_vars);
        if num_vars > MAX_VARS {
            return Err(GroebnerError::TooManyVariables {
                num_vars,
                max: MAX_VARS,
            });
        }
        if let Some(bad) = generators.iter().find(|g| g.num_vars() != num_vars) {
            return Err(GroebnerError::MismatchedVariables {
                expected: num_vars,
                found: bad.num_vars(),
            });
        }

        let mut state = Self {
            basis: Vec::with_capacity(generators.len()),
            sugars: Vec::with_capacity(generators.len()),
            pairs: Vec::new(),
            retired: FxHashSet::default(),
            inconsistent: false,
            num_vars,
            config,
            stats: GroebnerStats::default(),
        };

        for g in generators {
            let g = g.with_order(state.config.order);
            if g.is_zero() {
                continue;
            }
            if g.is_constant() {
                state.inconsistent = true;
                break;
            }
            let sugar = g.total_degree();
            state.insert(g.make_monic(), sugar);
        }

        Ok(state)
    }

    /// Runs the algorithm to completion and returns the reduced Gröbner
    /// basis, sorted by leading monomial, largest first.
    ///
    /// An inconsistent system yields `[1]`.
    ///
    /// # Errors
    ///
    /// Returns `PairLimitExceeded` when `max_pairs` runs out.
    pub fn run(&mut self) -> Result<Vec<SparsePoly<R>>, GroebnerError> {
        while !self.inconsistent && !self.pairs.is_empty() {
            self.step()?;
        }

        debug!(
            order = %self.config.order,
            pairs_reduced = self.stats.pairs_reduced,
            zero_reductions = self.stats.zero_reductions,
            product_skipped = self.stats.product_skipped,
            chain_skipped = self.stats.chain_skipped,
            batches = self.stats.batches,
            max_basis_size = self.stats.max_basis_size,
            "buchberger finished"
        );

        if self.inconsistent {
            self.pairs.clear();
            return Ok(vec![SparsePoly::one(self.num_vars, self.config.order)]);
        }

        Ok(reduce_basis(std::mem::take(&mut self.basis)))
    }

    /// Returns the counters collected so far.
    pub fn stats(&self) -> &GroebnerStats {
        &self.stats
    }

    /// Returns the number of pending pairs.
    pub fn pairs_remaining(&self) -> usize {
        self.pairs.len()
    }

    /// Processes one sugar batch.
    fn step(&mut self) -> Result<(), GroebnerError> {
        let batch = sugar_selection(&mut self.pairs, self.config.order, self.config.batch_size);

        let mut live = Vec::with_capacity(batch.len());
        for pair in batch {
            if chain_criterion(&pair, &self.basis, &self.retired) {
                self.retired.insert(pair.key());
                self.stats.chain_skipped += 1;
            } else {
                live.push(pair);
            }
        }
        if live.is_empty() {
            return Ok(());
        }

        let limit = self.config.max_pairs;
        if limit > 0 && self.stats.pairs_reduced + live.len() > limit {
            return Err(GroebnerError::PairLimitExceeded { limit });
        }

        let basis = &self.basis;
        let reduce_pair =
            |pair: &CriticalPair| normal_form(&s_polynomial(&basis[pair.i], &basis[pair.j]), basis);
        let remainders: Vec<SparsePoly<R>> = if self.config.parallel {
            live.par_iter().map(reduce_pair).collect()
        } else {
            live.iter().map(reduce_pair).collect()
        };

        self.stats.batches += 1;
        self.stats.pairs_reduced += live.len();
        trace!(
            batch = live.len(),
            sugar = live[0].sugar,
            basis = self.basis.len(),
            pending = self.pairs.len(),
            "reduced batch"
        );

        for (pair, remainder) in live.iter().zip(remainders) {
            self.retired.insert(pair.key());
            if remainder.is_zero() {
                self.stats.zero_reductions += 1;
                continue;
            }

            // The basis may have grown since the snapshot.
            let remainder = normal_form(&remainder, &self.basis);
            if remainder.is_zero() {
                self.stats.zero_reductions += 1;
                continue;
            }
            if remainder.is_constant() {
                self.inconsistent = true;
                return Ok(());
            }

            let sugar = pair.sugar.max(remainder.total_degree());
            self.insert(remainder.make_monic(), sugar);
        }

        Ok(())
    }

    /// Appends a monic polynomial to the basis and queues its pairs.
    fn insert(&mut self, poly: SparsePoly<R>, sugar: u32) {
        let Some(lm_new) = poly.leading_monomial().copied() else {
            return;
        };
        let idx = self.basis.len();

        for (k, g) in self.basis.iter().enumerate() {
            let Some(lm_k) = g.leading_monomial() else {
                continue;
            };
            let pair = CriticalPair::new(k, idx, lm_k, &lm_new, self.sugars[k], sugar);
            if product_criterion(lm_k, &lm_new) {
                self.retired.insert(pair.key());
                self.stats.product_skipped += 1;
            } else {
                self.pairs.push(pair);
            }
        }

        self.basis.push(poly);
        self.sugars.push(sugar);
        self.stats.max_basis_size = self.stats.max_basis_size.max(self.basis.len());
    }
}

/// Computes the reduced Gröbner basis of `generators` under `config.order`.
///
/// # Errors
///
/// See [`Buchberger::new`] and [`Buchberger::run`].
pub fn groebner_basis<R: Field + Send + Sync>(
    generators: Vec<SparsePoly<R>>,
    config: &GroebnerConfig,
) -> Result<Vec<SparsePoly<R>>, GroebnerError> {
    Buchberger::new(generators, config.clone())?.run()
}
