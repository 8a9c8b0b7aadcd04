//! Common types: coordinates, cell states, shot outcomes and errors.

use crate::ship::Ship;

/// A grid coordinate. Rows and columns are signed so that out-of-range
/// probes such as `(-1, 0)` are expressible; the board decides validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbors, in up/down/left/right order.
    pub fn orthogonal(self) -> [Coord; 4] {
        [
            Coord::new(self.row - 1, self.col),
            Coord::new(self.row + 1, self.col),
            Coord::new(self.row, self.col - 1),
            Coord::new(self.row, self.col + 1),
        ]
    }

    /// All eight surrounding neighbors, including diagonals.
    pub fn surrounding(self) -> [Coord; 8] {
        [
            Coord::new(self.row - 1, self.col - 1),
            Coord::new(self.row - 1, self.col),
            Coord::new(self.row - 1, self.col + 1),
            Coord::new(self.row, self.col - 1),
            Coord::new(self.row, self.col + 1),
            Coord::new(self.row + 1, self.col - 1),
            Coord::new(self.row + 1, self.col),
            Coord::new(self.row + 1, self.col + 1),
        ]
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
    Miss,
}

/// Result of applying a shot to a board. Rejected shots are outcomes,
/// not errors: the board is unchanged and the caller retries or reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on an occupied cell.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Cell was already hit or missed; shots are not retryable.
    AlreadyResolved,
}

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannotPlaceReason {
    /// Part of the ship would fall outside the grid.
    OutOfBounds,
    /// Part of the ship would cover an occupied cell.
    Occupied,
    /// The ship would touch another ship, diagonals included.
    Adjacent,
    /// The ship value has already been placed on a board.
    AlreadyPlaced,
}

impl core::fmt::Display for CannotPlaceReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CannotPlaceReason::OutOfBounds => write!(f, "placement is out of bounds"),
            CannotPlaceReason::Occupied => write!(f, "placement overlaps another ship"),
            CannotPlaceReason::Adjacent => write!(f, "placement touches another ship"),
            CannotPlaceReason::AlreadyPlaced => write!(f, "ship is already placed"),
        }
    }
}

/// A rejected placement. Carries the unplaced ship back to the caller so
/// it can retry with a different position.
#[derive(Debug)]
pub struct PlaceError {
    reason: CannotPlaceReason,
    ship: Ship,
}

impl PlaceError {
    pub(crate) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Recover the ship for another placement attempt.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl core::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "cannot place {}: {}", self.ship.name(), self.reason)
    }
}

/// Errors returned by board construction and random placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimensions must both be at least 1.
    InvalidDimensions,
    /// Random placement ran out of retries before fitting the fleet.
    PlacementExhausted,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions => write!(f, "board dimensions must be at least 1x1"),
            BoardError::PlacementExhausted => {
                write!(f, "unable to place fleet within the retry budget")
            }
        }
    }
}
