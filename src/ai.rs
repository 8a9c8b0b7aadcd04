// Search/hunt targeting for the automated opponent. Operates only on the
// redacted shots view, never on the opponent's true board.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::board::{Observation, ShotsView};
use crate::common::Coord;

/// Targeting memory: a pool of not-yet-chosen coordinates for random
/// search, and a FIFO queue of follow-up candidates built around hits.
///
/// The queue is never purged when a ship sinks; entries that have become
/// resolved are discarded lazily when popped.
pub struct Targeting {
    pool: Vec<Coord>,
    queue: VecDeque<Coord>,
}

impl Targeting {
    /// Fresh memory for a `rows` x `cols` opponent board.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut pool = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                pool.push(Coord::new(r as i32, c as i32));
            }
        }
        Self {
            pool,
            queue: VecDeque::new(),
        }
    }

    /// Enqueue the orthogonal neighbors of a hit that are in bounds, not
    /// yet resolved and not already queued.
    pub fn record_hit(&mut self, coord: Coord, view: &ShotsView<'_>) {
        for n in coord.orthogonal() {
            if view.in_bounds(n)
                && view.observe(n) == Observation::Untried
                && !self.queue.contains(&n)
            {
                self.queue.push_back(n);
            }
        }
    }

    /// Pick the next shot: drain the hunt queue front-first, skipping
    /// entries that have since become resolved, then fall back to uniform
    /// draws from the pool. `None` once both are exhausted.
    pub fn choose<R: Rng + ?Sized>(&mut self, rng: &mut R, view: &ShotsView<'_>) -> Option<Coord> {
        while let Some(coord) = self.queue.pop_front() {
            if view.observe(coord) == Observation::Untried {
                // Keep the pool in sync so search never re-picks it.
                if let Some(i) = self.pool.iter().position(|c| *c == coord) {
                    self.pool.swap_remove(i);
                }
                return Some(coord);
            }
            // Stale entry, e.g. queued from two different hits.
        }
        while !self.pool.is_empty() {
            let i = rng.random_range(0..self.pool.len());
            let coord = self.pool.swap_remove(i);
            if view.observe(coord) == Observation::Untried {
                return Some(coord);
            }
        }
        None
    }

    /// Whether follow-up candidates are pending.
    pub fn is_hunting(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The pending hunt queue, front first.
    pub fn queued(&self) -> impl Iterator<Item = Coord> + '_ {
        self.queue.iter().copied()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }
}
