use flotilla::{
    run_match, AiPlayer, Board, BoardError, Coord, GameConfig, Player, ShipSpec, ShotsView,
    WinReason,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_vs_ai_match_terminates() {
    let mut rng = SmallRng::seed_from_u64(123);
    let config = GameConfig::default();
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();

    let result = run_match(&config, [&mut p1, &mut p2], &mut rng).unwrap();

    assert!(result.winner < 2);
    assert_eq!(result.reason, WinReason::FleetSunk);
    let loser = 1 - result.winner;
    assert!(result.boards[loser].all_sunk());
    assert!(!result.boards[result.winner].all_sunk());

    // the winner fired at least one shot per enemy ship cell
    let cells: usize = config.fleet.iter().map(|s| s.length()).sum();
    assert!(result.shots[result.winner] >= cells);
    // nobody can out-shoot the board
    let total = config.rows * config.cols;
    assert!(result.shots[0] <= total && result.shots[1] <= total);
}

#[test]
fn test_ai_vs_ai_small_board() {
    let mut rng = SmallRng::seed_from_u64(9);
    let config = GameConfig {
        rows: 6,
        cols: 6,
        fleet: vec![ShipSpec::new("Cruiser", 3), ShipSpec::new("Destroyer", 2)],
        ..GameConfig::default()
    };
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();

    let result = run_match(&config, [&mut p1, &mut p2], &mut rng).unwrap();
    assert_eq!(result.reason, WinReason::FleetSunk);
}

struct Quitter;

impl Player for Quitter {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipSpec],
    ) -> Result<(), BoardError> {
        board.place_fleet_random(fleet, rng, Default::default())
    }

    fn choose_shot(&mut self, _rng: &mut SmallRng, _view: &ShotsView<'_>) -> Option<Coord> {
        None
    }
}

#[test]
fn test_withdrawal_forfeits_the_match() {
    let mut rng = SmallRng::seed_from_u64(4);
    let config = GameConfig::default();
    let mut quitter = Quitter;
    let mut ai = AiPlayer::new();

    let result = run_match(&config, [&mut quitter, &mut ai], &mut rng).unwrap();
    assert_eq!(result.winner, 1);
    assert_eq!(result.reason, WinReason::Withdrawal);
    assert_eq!(result.shots, [0, 0]);
}
