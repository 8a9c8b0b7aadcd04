//! Board state: grid, placement validation and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::common::{BoardError, CannotPlaceReason, CellState, Coord, PlaceError, ShotOutcome};
use crate::config::RetryBudget;
use crate::ship::{Orientation, Ship, ShipSpec};

/// A combatant's board: a row-major grid of cell states plus the registry
/// of ships placed on it. One board per combatant, never shared.
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Vec<CellState>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board. Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        Ok(Board {
            rows,
            cols,
            grid: alloc::vec![CellState::Empty; rows * cols],
            ships: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    fn idx(&self, coord: Coord) -> usize {
        coord.row as usize * self.cols + coord.col as usize
    }

    /// Cell state at `coord`, or `None` out of bounds.
    pub fn cell_at(&self, coord: Coord) -> Option<CellState> {
        if self.in_bounds(coord) {
            Some(self.grid[self.idx(coord)])
        } else {
            None
        }
    }

    /// The placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying `coord`, if any. At most one by the no-overlap
    /// invariant.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// `true` when every registered ship is sunk. Vacuously true on an
    /// empty registry, so callers must not ask before placement completes.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Drop all placements and shot marks, keeping the dimensions.
    pub fn clear(&mut self) {
        self.grid.fill(CellState::Empty);
        self.ships.clear();
    }

    /// Redacted view of this board for opponents: resolved cells only.
    pub fn shots_view(&self) -> ShotsView<'_> {
        ShotsView { board: self }
    }

    fn line_cell(origin: Coord, orientation: Orientation, step: usize) -> Coord {
        match orientation {
            Orientation::Horizontal => Coord::new(origin.row, origin.col + step as i32),
            Orientation::Vertical => Coord::new(origin.row + step as i32, origin.col),
        }
    }

    fn placement_violation(
        &self,
        origin: Coord,
        orientation: Orientation,
        size: usize,
    ) -> Option<CannotPlaceReason> {
        if size == 0 {
            return Some(CannotPlaceReason::OutOfBounds);
        }
        for i in 0..size {
            let cell = Self::line_cell(origin, orientation, i);
            if !self.in_bounds(cell) {
                return Some(CannotPlaceReason::OutOfBounds);
            }
            if self.grid[self.idx(cell)] != CellState::Empty {
                return Some(CannotPlaceReason::Occupied);
            }
            // No-touch rule: no occupied cell among the 8 neighbors. The
            // candidate's own cells are still Empty, so no self-exclusion
            // is needed.
            for n in cell.surrounding() {
                if self.in_bounds(n) && self.grid[self.idx(n)] == CellState::Occupied {
                    return Some(CannotPlaceReason::Adjacent);
                }
            }
        }
        None
    }

    /// Whether a ship of `size` fits at `origin` along `orientation`
    /// without leaving the grid, overlapping or touching another ship.
    /// Pure check, no side effects.
    pub fn can_place(&self, origin: Coord, orientation: Orientation, size: usize) -> bool {
        self.placement_violation(origin, orientation, size).is_none()
    }

    /// Validate then commit a placement. On success the ship's cells are
    /// assigned and it joins the registry. On failure the board is
    /// untouched and the error hands the ship back.
    pub fn place_ship(
        &mut self,
        mut ship: Ship,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        if ship.is_placed() {
            return Err(PlaceError::new(CannotPlaceReason::AlreadyPlaced, ship));
        }
        let size = ship.length();
        if let Some(reason) = self.placement_violation(origin, orientation, size) {
            return Err(PlaceError::new(reason, ship));
        }
        let mut cells = Vec::with_capacity(size);
        for i in 0..size {
            let cell = Self::line_cell(origin, orientation, i);
            let idx = self.idx(cell);
            self.grid[idx] = CellState::Occupied;
            cells.push(cell);
        }
        ship.assign_cells(cells);
        self.ships.push(ship);
        Ok(())
    }

    /// Find a random valid `(origin, orientation)` for a ship of `size`,
    /// trying at most `tries` candidates against the current board.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        size: usize,
        tries: usize,
    ) -> Result<(Coord, Orientation), BoardError> {
        for _ in 0..tries {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let span = match orientation {
                Orientation::Horizontal => self.cols,
                Orientation::Vertical => self.rows,
            };
            if size == 0 || size > span {
                continue;
            }
            let max_r = match orientation {
                Orientation::Horizontal => self.rows - 1,
                Orientation::Vertical => self.rows - size,
            };
            let max_c = match orientation {
                Orientation::Horizontal => self.cols - size,
                Orientation::Vertical => self.cols - 1,
            };
            let origin = Coord::new(
                rng.random_range(0..=max_r) as i32,
                rng.random_range(0..=max_c) as i32,
            );
            if self.can_place(origin, orientation, size) {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::PlacementExhausted)
    }

    /// Randomly place a whole fleet. Each pass clears the board and places
    /// the ships in order with up to `budget.per_ship` candidates each; a
    /// ship that cannot be fitted triggers the next full-reset pass, up to
    /// `budget.board_resets` passes in total.
    pub fn place_fleet_random<R: Rng + ?Sized>(
        &mut self,
        fleet: &[ShipSpec],
        rng: &mut R,
        budget: RetryBudget,
    ) -> Result<(), BoardError> {
        for pass in 0..budget.board_resets {
            self.clear();
            let mut placed_all = true;
            for spec in fleet {
                match self.random_placement(rng, spec.length(), budget.per_ship) {
                    Ok((origin, orientation)) => {
                        if self.place_ship(Ship::new(*spec), origin, orientation).is_err() {
                            placed_all = false;
                            break;
                        }
                    }
                    Err(_) => {
                        placed_all = false;
                        break;
                    }
                }
            }
            if placed_all {
                return Ok(());
            }
            log::debug!("fleet placement pass {} failed, resetting board", pass + 1);
        }
        self.clear();
        Err(BoardError::PlacementExhausted)
    }

    /// Resolve an incoming shot. Rejected shots (`OutOfBounds`,
    /// `AlreadyResolved`) leave the board unchanged. Sinking is a derived
    /// query: after a `Hit`, callers consult `ship_at(coord)`.
    pub fn receive_shot(&mut self, coord: Coord) -> ShotOutcome {
        if !self.in_bounds(coord) {
            return ShotOutcome::OutOfBounds;
        }
        let idx = self.idx(coord);
        match self.grid[idx] {
            CellState::Hit | CellState::Miss => ShotOutcome::AlreadyResolved,
            CellState::Occupied => {
                self.grid[idx] = CellState::Hit;
                // Exactly one ship owns this cell by the no-overlap invariant.
                if let Some(ship) = self.ships.iter_mut().find(|s| s.contains(coord)) {
                    ship.register_hit(coord);
                }
                ShotOutcome::Hit
            }
            CellState::Empty => {
                self.grid[idx] = CellState::Miss;
                ShotOutcome::Miss
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "  ")?;
            for c in 0..self.cols {
                let ch = match self.grid[r * self.cols + c] {
                    CellState::Empty => '.',
                    CellState::Occupied => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}

/// What an opponent can observe about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Untried,
    Hit,
    Miss,
}

/// Read-only, redacted view of a board: dimensions and resolved cells.
/// Occupied-but-unshot cells read as `Untried`, so holders of this view
/// learn nothing about unhit ships.
#[derive(Clone, Copy)]
pub struct ShotsView<'a> {
    board: &'a Board,
}

impl ShotsView<'_> {
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.board.in_bounds(coord)
    }

    /// Out-of-bounds coordinates read as `Untried`.
    pub fn observe(&self, coord: Coord) -> Observation {
        match self.board.cell_at(coord) {
            Some(CellState::Hit) => Observation::Hit,
            Some(CellState::Miss) => Observation::Miss,
            _ => Observation::Untried,
        }
    }
}
