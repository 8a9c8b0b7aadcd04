//! Ship definitions: immutable specs and per-game hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    /// Create a new ship spec.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship instance. Created unplaced; the board assigns its cells exactly
/// once at placement, after which they are immutable. Hits only accumulate.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    spec: ShipSpec,
    cells: Vec<Coord>,
    hits: Vec<bool>,
}

impl Ship {
    /// Create an unplaced ship from its spec.
    pub fn new(spec: ShipSpec) -> Self {
        Self {
            spec,
            cells: Vec::new(),
            hits: Vec::new(),
        }
    }

    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    pub fn length(&self) -> usize {
        self.spec.length()
    }

    /// Whether the ship has been committed to a board.
    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// The occupied coordinates, in placement order. Empty while unplaced.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|h| **h).count()
    }

    /// A ship is sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.is_placed() && self.hits.iter().all(|h| *h)
    }

    /// Assign the coordinate line at placement time. Called exactly once,
    /// by the board, after validation.
    pub(crate) fn assign_cells(&mut self, cells: Vec<Coord>) {
        debug_assert_eq!(cells.len(), self.spec.length());
        self.hits = alloc::vec![false; cells.len()];
        self.cells = cells;
    }

    /// Record a hit at `coord`. Returns `true` if the coordinate belongs
    /// to this ship.
    pub(crate) fn register_hit(&mut self, coord: Coord) -> bool {
        match self.cells.iter().position(|c| *c == coord) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, cells: {:?}, hits: {} }}",
            self.spec.name(),
            self.spec.length(),
            self.cells,
            self.hit_count(),
        )
    }
}
