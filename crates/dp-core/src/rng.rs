//! Injected randomness.
//!
//! The simulation never touches ambient randomness.  Every draw (per-tick turn
//! order, think/eat/drop decisions, erratic resource picks) goes through a
//! [`RandomSource`] handed to the simulation at construction.
//!
//! - [`SimRng`] wraps a seeded `SmallRng`: the same seed always produces the
//!   same run.
//! - [`ScriptedRng`] replays queued outcomes and falls back to fixed values,
//!   so individual transitions can be forced in tests and replays.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// A pluggable source of simulation randomness.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    ///
    /// Callers compare it against a probability: `next_unit() < p` means the
    /// event with probability `p` happened.
    fn next_unit(&mut self) -> f64;

    /// A uniform index in `[0, bound)`.  `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Permute `order` in place.
    ///
    /// The default is a Fisher-Yates pass driven by [`next_index`](Self::next_index).
    fn shuffle(&mut self, order: &mut [AgentId]) {
        for i in (1..order.len()).rev() {
            let j = self.next_index(i + 1);
            order.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }

    #[inline]
    fn shuffle(&mut self, order: &mut [AgentId]) {
        (**self).shuffle(order)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation-level RNG.
///
/// Used only from the single-threaded tick loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }

    #[inline]
    fn shuffle(&mut self, order: &mut [AgentId]) {
        use rand::seq::SliceRandom;
        order.shuffle(&mut self.0);
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// A [`RandomSource`] that replays fixed outcomes.
///
/// Unit draws and indices are popped from their queues; once a queue is empty
/// the matching fallback is returned forever.  Unless
/// [`shuffled`](Self::shuffled) is set, `shuffle` leaves the order untouched,
/// so agents are processed in ascending id order.
///
/// ```rust
/// use dp_core::{RandomSource, ScriptedRng};
///
/// // Every unit draw is 0.99: agents always leave Thinking and Eating.
/// let mut rng = ScriptedRng::constant(0.99);
/// assert_eq!(rng.next_unit(), 0.99);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    units:          VecDeque<f64>,
    indices:        VecDeque<usize>,
    fallback_unit:  f64,
    fallback_index: usize,
    shuffle:        bool,
}

impl ScriptedRng {
    /// Every unit draw returns `unit`; every index draw returns 0.
    pub fn constant(unit: f64) -> Self {
        Self {
            units:          VecDeque::new(),
            indices:        VecDeque::new(),
            fallback_unit:  unit,
            fallback_index: 0,
            shuffle:        false,
        }
    }

    /// Queue unit draws to be returned before the fallback.
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Queue index draws to be returned before the fallback.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Index returned once the index queue is exhausted.
    pub fn with_fallback_index(mut self, index: usize) -> Self {
        self.fallback_index = index;
        self
    }

    /// Run the default Fisher-Yates shuffle (consuming index draws) instead of
    /// keeping the order fixed.
    pub fn shuffled(mut self) -> Self {
        self.shuffle = true;
        self
    }

    /// Unit draws still queued.
    pub fn pending_units(&self) -> usize {
        self.units.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(self.fallback_unit)
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.indices.pop_front().unwrap_or(self.fallback_index) % bound
    }

    fn shuffle(&mut self, order: &mut [AgentId]) {
        if self.shuffle {
            for i in (1..order.len()).rev() {
                let j = self.next_index(i + 1);
                order.swap(i, j);
            }
        }
    }
}
