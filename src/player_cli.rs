#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::{
    board::{Board, Observation, ShotsView},
    common::{BoardError, CellState, Coord, ShotOutcome},
    config::PLACEMENT_TRIES_PER_SHIP,
    player::Player,
    ship::{Orientation, Ship, ShipSpec},
};
use rand::rngs::SmallRng;

/// Interactive combatant reading moves from stdin. All parsing and
/// rendering lives here; malformed input never reaches the board.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    std::format!("{}{}", col, coord.row + 1)
}

fn parse_coord(input: &str) -> Option<Coord> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as i32;
    let row_str: String = chars.collect();
    let row: i32 = row_str.parse().ok()?;
    if row < 1 {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

/// Render a board; `reveal` shows unhit ship cells.
pub fn print_board(board: &Board, reveal: bool) {
    std::print!("   ");
    for c in 0..board.cols() {
        let ch = (b'A' + c as u8) as char;
        std::print!(" {}", ch);
    }
    std::println!();
    for r in 0..board.rows() {
        std::print!("{:2} ", r + 1);
        for c in 0..board.cols() {
            let ch = match board.cell_at(Coord::new(r as i32, c as i32)) {
                Some(CellState::Hit) => 'X',
                Some(CellState::Miss) => 'o',
                Some(CellState::Occupied) if reveal => 'S',
                _ => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

/// Render the redacted opponent view.
pub fn print_view(view: &ShotsView<'_>) {
    std::print!("   ");
    for c in 0..view.cols() {
        let ch = (b'A' + c as u8) as char;
        std::print!(" {}", ch);
    }
    std::println!();
    for r in 0..view.rows() {
        std::print!("{:2} ", r + 1);
        for c in 0..view.cols() {
            let ch = match view.observe(Coord::new(r as i32, c as i32)) {
                Observation::Hit => 'X',
                Observation::Miss => 'o',
                Observation::Untried => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

fn read_line() -> String {
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
    line.trim().to_string()
}

impl Player for CliPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipSpec],
    ) -> Result<(), BoardError> {
        std::println!("Place your ships (e.g. B4 H). Press enter for random placement.");
        for spec in fleet {
            loop {
                print_board(board, true);
                std::print!("Place {} (length {}): ", spec.name(), spec.length());
                io::stdout().flush().unwrap();
                let line = read_line();
                if line.is_empty() {
                    let (origin, orientation) =
                        board.random_placement(rng, spec.length(), PLACEMENT_TRIES_PER_SHIP)?;
                    if board.place_ship(Ship::new(*spec), origin, orientation).is_ok() {
                        break;
                    }
                    continue;
                }
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(parse_coord);
                let orient = parts.next().map(|p| p.chars().next().unwrap_or('H'));
                if let (Some(origin), Some(o)) = (coord, orient) {
                    let orientation = if o == 'v' || o == 'V' {
                        Orientation::Vertical
                    } else {
                        Orientation::Horizontal
                    };
                    match board.place_ship(Ship::new(*spec), origin, orientation) {
                        Ok(()) => break,
                        Err(e) => std::println!("Cannot place there: {}", e.reason()),
                    }
                } else {
                    std::println!("Invalid input");
                }
            }
        }
        std::println!("Fleet placed:");
        print_board(board, true);
        Ok(())
    }

    fn choose_shot(&mut self, _rng: &mut SmallRng, view: &ShotsView<'_>) -> Option<Coord> {
        std::println!("\nOpponent waters:");
        print_view(view);
        loop {
            std::print!("Enter target (e.g. B4, q to quit): ");
            io::stdout().flush().unwrap();
            let line = read_line();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            if let Some(coord) = parse_coord(&line) {
                return Some(coord);
            }
            std::println!("Invalid coordinate");
        }
    }

    fn handle_shot_result(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        sunk: Option<&'static str>,
        _view: &ShotsView<'_>,
    ) {
        match outcome {
            ShotOutcome::Hit => std::println!("You fired at {} -> hit!", coord_to_string(coord)),
            ShotOutcome::Miss => std::println!("You fired at {} -> miss.", coord_to_string(coord)),
            ShotOutcome::OutOfBounds => std::println!("That shot is off the board, try again."),
            ShotOutcome::AlreadyResolved => {
                std::println!("You already fired at {}, try again.", coord_to_string(coord))
            }
        }
        if let Some(name) = sunk {
            std::println!("You sank the {}!", name);
        }
    }

    fn handle_incoming_shot(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        sunk: Option<&'static str>,
    ) {
        match outcome {
            ShotOutcome::Hit => {
                std::println!("Opponent fired at {} -> hit.", coord_to_string(coord))
            }
            ShotOutcome::Miss => {
                std::println!("Opponent fired at {} -> miss.", coord_to_string(coord))
            }
            _ => {}
        }
        if let Some(name) = sunk {
            std::println!("Your {} was sunk!", name);
        }
    }
}
