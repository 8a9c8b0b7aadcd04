//! Match driver: setup and strict turn alternation. No presentation.

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    config::GameConfig,
    player::Player,
};

/// How a match was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The losing side's fleet was fully sunk.
    FleetSunk,
    /// The losing side offered no further move.
    Withdrawal,
}

/// Outcome of a finished match. Boards are returned so the caller can
/// render the final state.
#[derive(Debug)]
pub struct MatchResult {
    /// Index into the players array passed to [`run_match`].
    pub winner: usize,
    pub reason: WinReason,
    /// Resolved shots fired per side (rejected shots are not counted).
    pub shots: [usize; 2],
    pub boards: [Board; 2],
}

/// Run a full match between two combatants: build a board per side, let
/// each place the configured fleet, then alternate shots until one fleet
/// is sunk or a combatant withdraws.
///
/// Rejected shots (`OutOfBounds`, `AlreadyResolved`) are reported back to
/// the attacker, who retries the same turn; they mutate nothing.
pub fn run_match(
    config: &GameConfig,
    mut players: [&mut dyn Player; 2],
    rng: &mut SmallRng,
) -> Result<MatchResult, BoardError> {
    let mut boards = [
        Board::new(config.rows, config.cols)?,
        Board::new(config.rows, config.cols)?,
    ];
    for (player, board) in players.iter_mut().zip(boards.iter_mut()) {
        player.place_fleet(rng, board, &config.fleet)?;
    }
    log::debug!(
        "match start: {}x{} board, {} ships per side",
        config.rows,
        config.cols,
        config.fleet.len()
    );

    let mut shots = [0usize; 2];
    let mut attacker = 0usize;
    loop {
        let defender = 1 - attacker;
        let coord = {
            let view = boards[defender].shots_view();
            players[attacker].choose_shot(rng, &view)
        };
        let Some(coord) = coord else {
            log::info!("combatant {} withdraws", attacker + 1);
            return Ok(MatchResult {
                winner: defender,
                reason: WinReason::Withdrawal,
                shots,
                boards,
            });
        };
        let outcome = boards[defender].receive_shot(coord);
        match outcome {
            ShotOutcome::OutOfBounds | ShotOutcome::AlreadyResolved => {
                let view = boards[defender].shots_view();
                players[attacker].handle_shot_result(coord, outcome, None, &view);
                // Turn is not consumed by a rejected shot.
            }
            ShotOutcome::Hit | ShotOutcome::Miss => {
                shots[attacker] += 1;
                let sunk = match outcome {
                    ShotOutcome::Hit => boards[defender]
                        .ship_at(coord)
                        .filter(|s| s.is_sunk())
                        .map(|s| s.name()),
                    _ => None,
                };
                {
                    let view = boards[defender].shots_view();
                    players[attacker].handle_shot_result(coord, outcome, sunk, &view);
                }
                players[defender].handle_incoming_shot(coord, outcome, sunk);
                if boards[defender].all_sunk() {
                    log::info!(
                        "combatant {} wins after {} shots",
                        attacker + 1,
                        shots[attacker]
                    );
                    return Ok(MatchResult {
                        winner: attacker,
                        reason: WinReason::FleetSunk,
                        shots,
                        boards,
                    });
                }
                attacker = defender;
            }
        }
    }
}
