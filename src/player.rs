use crate::{
    board::{Board, ShotsView},
    common::{BoardError, Coord, ShotOutcome},
    ship::ShipSpec,
};
use rand::rngs::SmallRng;

/// Interface implemented by the two combatant kinds. The driver never
/// branches on the concrete type.
pub trait Player {
    /// Place the given fleet onto the combatant's own board.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipSpec],
    ) -> Result<(), BoardError>;

    /// Choose the next target given the redacted view of the opponent's
    /// board. `None` withdraws from the match.
    fn choose_shot(&mut self, rng: &mut SmallRng, view: &ShotsView<'_>) -> Option<Coord>;

    /// Inform the combatant of the outcome of its own shot. `sunk` names a
    /// ship sunk by that shot.
    fn handle_shot_result(
        &mut self,
        _coord: Coord,
        _outcome: ShotOutcome,
        _sunk: Option<&'static str>,
        _view: &ShotsView<'_>,
    ) {
    }

    /// Inform the combatant of a shot received on its own board.
    fn handle_incoming_shot(
        &mut self,
        _coord: Coord,
        _outcome: ShotOutcome,
        _sunk: Option<&'static str>,
    ) {
    }
}
