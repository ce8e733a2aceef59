use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{config::DEFAULT_PLACEMENT_BUDGET, Game};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: u64 = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let mut wins = [0u64; 2];
    let mut total_shots = [0u64; 2];
    for i in 0..games {
        let rng = SmallRng::seed_from_u64(seed.wrapping_add(i));
        let mut game = Game::simulated(rng, DEFAULT_PLACEMENT_BUDGET);
        let report = game.run()?;
        wins[report.winner] += 1;
        total_shots[0] += report.shots[0] as u64;
        total_shots[1] += report.shots[1] as u64;
    }

    let summary = json!({
        "games": games,
        "first_player": { "wins": wins[0], "shots": total_shots[0] },
        "second_player": { "wins": wins[1], "shots": total_shots[1] },
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
