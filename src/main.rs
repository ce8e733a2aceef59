use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{config::DEFAULT_PLACEMENT_BUDGET, init_logging, ui, Game};

#[derive(Parser)]
#[command(author, version, about = "Console sea-battle against a random-shot computer")]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,

    /// Shared placement-attempt budget for one board build
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_BUDGET)]
    placement_budget: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    ui::print_greeting();
    let mut game = Game::console_game(rng, cli.placement_budget);
    let report = game.run()?;
    log::debug!(
        "match over: {} shots total",
        report.shots[0] + report.shots[1]
    );
    Ok(())
}
