use alloc::vec::Vec;

use crate::ship::ShipSpec;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Carrier", 5),
    ShipSpec::new("Battleship", 4),
    ShipSpec::new("Cruiser", 3),
    ShipSpec::new("Submarine", 3),
    ShipSpec::new("Destroyer", 2),
];

pub const PLACEMENT_TRIES_PER_SHIP: usize = 100;
pub const PLACEMENT_BOARD_RESETS: usize = 50;

/// Explicit ceiling for random fleet placement: candidate positions per
/// ship within one pass, and full board-reset passes overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    pub per_ship: usize,
    pub board_resets: usize,
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self {
            per_ship: PLACEMENT_TRIES_PER_SHIP,
            board_resets: PLACEMENT_BOARD_RESETS,
        }
    }
}

/// Runtime match configuration. The consts above are defaults, not limits.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub fleet: Vec<ShipSpec>,
    pub budget: RetryBudget,
}

impl GameConfig {
    /// Standard fleet on a square board of the given side.
    pub fn square(side: usize) -> Self {
        Self {
            rows: side,
            cols: side,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            fleet: SHIPS.to_vec(),
            budget: RetryBudget::default(),
        }
    }
}
