use flotilla::{Board, CellState, Coord, RetryBudget, ShotOutcome, SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(10, 10).unwrap();
    board
        .place_fleet_random(&SHIPS, &mut rng, RetryBudget::default())
        .unwrap();
    let shots = rng.random_range(0..20);
    for _ in 0..shots {
        let r = rng.random_range(0..10) as i32;
        let c = rng.random_range(0..10) as i32;
        board.receive_shot(Coord::new(r, c));
    }
    board
}

fn grid_snapshot(board: &Board) -> Vec<CellState> {
    (0..board.rows() as i32)
        .flat_map(|r| (0..board.cols() as i32).map(move |c| Coord::new(r, c)))
        .map(|coord| board.cell_at(coord).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_geometry_holds(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ships().len(), SHIPS.len());

        // each ship occupies a contiguous line of its length
        for ship in board.ships() {
            let cells = ship.cells();
            prop_assert_eq!(cells.len(), ship.length());
            let horizontal = cells.windows(2).all(|w| {
                w[1].row == w[0].row && w[1].col == w[0].col + 1
            });
            let vertical = cells.windows(2).all(|w| {
                w[1].col == w[0].col && w[1].row == w[0].row + 1
            });
            prop_assert!(horizontal || vertical);
        }

        // no two ships overlap or touch, diagonals included
        for (i, a) in board.ships().iter().enumerate() {
            for b in board.ships().iter().skip(i + 1) {
                for &ca in a.cells() {
                    for &cb in b.cells() {
                        let dr = (ca.row - cb.row).abs();
                        let dc = (ca.col - cb.col).abs();
                        prop_assert!(dr > 1 || dc > 1);
                    }
                }
            }
        }
    }

    #[test]
    fn shot_idempotent(seed in any::<u64>(), row in 0i32..10, col in 0i32..10) {
        let mut board = random_board(seed);
        let coord = Coord::new(row, col);
        let first = board.receive_shot(coord);
        let after_first = grid_snapshot(&board);
        let hits_after_first: Vec<usize> =
            board.ships().iter().map(|s| s.hit_count()).collect();

        let second = board.receive_shot(coord);
        prop_assert_eq!(second, ShotOutcome::AlreadyResolved);
        prop_assert_eq!(grid_snapshot(&board), after_first);
        let hits_after_second: Vec<usize> =
            board.ships().iter().map(|s| s.hit_count()).collect();
        prop_assert_eq!(hits_after_second, hits_after_first);
        prop_assert_ne!(first, ShotOutcome::OutOfBounds);
    }

    #[test]
    fn all_sunk_matches_hit_counts(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let expected = board
            .ships()
            .iter()
            .all(|s| s.hit_count() == s.length());
        prop_assert_eq!(board.all_sunk(), expected);

        // sink everything and re-check
        let targets: Vec<Coord> = board
            .ships()
            .iter()
            .flat_map(|s| s.cells().iter().copied())
            .collect();
        for coord in targets {
            board.receive_shot(coord);
        }
        prop_assert!(board.all_sunk());
    }

    #[test]
    fn cell_states_derive_from_ships(seed in any::<u64>()) {
        let board = random_board(seed);
        for r in 0..10i32 {
            for c in 0..10i32 {
                let coord = Coord::new(r, c);
                let owned = board.ship_at(coord).is_some();
                match board.cell_at(coord).unwrap() {
                    CellState::Occupied | CellState::Hit => prop_assert!(owned),
                    CellState::Empty | CellState::Miss => prop_assert!(!owned),
                }
            }
        }
    }
}
