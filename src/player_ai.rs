use crate::{
    ai::Targeting,
    board::{Board, ShotsView},
    common::{BoardError, Coord, ShotOutcome},
    config::RetryBudget,
    player::Player,
    ship::ShipSpec,
};
use rand::rngs::SmallRng;

/// Automated combatant: random fleet placement plus search/hunt targeting.
pub struct AiPlayer {
    budget: RetryBudget,
    targeting: Option<Targeting>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::with_budget(RetryBudget::default())
    }

    pub fn with_budget(budget: RetryBudget) -> Self {
        Self {
            budget,
            targeting: None,
        }
    }

    // Targeting memory is sized from the first view of the opponent board.
    fn targeting(&mut self, view: &ShotsView<'_>) -> &mut Targeting {
        self.targeting
            .get_or_insert_with(|| Targeting::new(view.rows(), view.cols()))
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipSpec],
    ) -> Result<(), BoardError> {
        board.place_fleet_random(fleet, rng, self.budget)
    }

    fn choose_shot(&mut self, rng: &mut SmallRng, view: &ShotsView<'_>) -> Option<Coord> {
        self.targeting(view).choose(rng, view)
    }

    fn handle_shot_result(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        _sunk: Option<&'static str>,
        view: &ShotsView<'_>,
    ) {
        if outcome == ShotOutcome::Hit {
            self.targeting(view).record_hit(coord, view);
        }
    }
}
