use flotilla::{run_match, AiPlayer, GameConfig, WinReason};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::default();
    let mut p1 = AiPlayer::with_budget(config.budget);
    let mut p2 = AiPlayer::with_budget(config.budget);

    let result =
        run_match(&config, [&mut p1, &mut p2], &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let winner = match result.winner {
        0 => "player1",
        _ => "player2",
    };
    let reason = match result.reason {
        WinReason::FleetSunk => "fleet_sunk",
        WinReason::Withdrawal => "withdrawal",
    };
    let summary = json!({
        "seed": seed,
        "winner": winner,
        "reason": reason,
        "shots": {"player1": result.shots[0], "player2": result.shots[1]},
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
