#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use flotilla::{
    init_logging, print_board, run_match, AiPlayer, CliPlayer, GameConfig, MatchResult, WinReason,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

// Columns render as letters, so 26 is the widest printable board. The
// lower bound leaves room for the standard fleet under the no-touch rule.
#[cfg(feature = "std")]
const MIN_BOARD_SIDE: usize = 8;
#[cfg(feature = "std")]
const MAX_BOARD_SIDE: usize = 26;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, default_value_t = flotilla::DEFAULT_BOARD_SIZE, help = "Board side length")]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two automated opponents play each other.
    Auto {
        #[arg(long, default_value_t = flotilla::DEFAULT_BOARD_SIZE, help = "Board side length")]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn config_for(size: usize) -> GameConfig {
    let side = size.clamp(MIN_BOARD_SIDE, MAX_BOARD_SIDE);
    if side != size {
        log::warn!("board size {} out of range, using {}", size, side);
    }
    GameConfig::square(side)
}

#[cfg(feature = "std")]
fn report(result: &MatchResult, names: [&str; 2]) {
    for (i, board) in result.boards.iter().enumerate() {
        println!("\n{} board:", names[i]);
        print_board(board, true);
    }
    match result.reason {
        WinReason::FleetSunk => println!(
            "\n{} wins: the opposing fleet is sunk ({} shots).",
            names[result.winner], result.shots[result.winner]
        ),
        WinReason::Withdrawal => {
            println!("\n{} wins by withdrawal.", names[result.winner])
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { size, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let config = config_for(size);
            let mut human = CliPlayer::new();
            let mut ai = AiPlayer::with_budget(config.budget);
            let result = run_match(&config, [&mut human, &mut ai], &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            report(&result, ["Your", "Opponent"]);
        }
        Commands::Auto { size, seed } => {
            println!("Starting AI vs AI game...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let config = config_for(size);
            let mut ai1 = AiPlayer::with_budget(config.budget);
            let mut ai2 = AiPlayer::with_budget(config.budget);
            let result =
                run_match(&config, [&mut ai1, &mut ai2], &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            report(&result, ["Player 1", "Player 2"]);
            println!(
                "Shots fired: {} vs {}",
                result.shots[0], result.shots[1]
            );
        }
    }
    Ok(())
}
