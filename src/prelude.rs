//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_match, AiPlayer, Board, Coord, GameConfig, MatchResult, Orientation, Player, ShipSpec,
    ShotOutcome, Targeting, WinReason,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, print_view, CliPlayer};
