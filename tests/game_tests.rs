use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::config::{DEFAULT_PLACEMENT_BUDGET, NUM_SHIPS, TOTAL_SHIP_CELLS};
use seabattle::Game;

#[test]
fn test_simulated_match_terminates_with_winner() {
    for seed in 0..10u64 {
        let rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::simulated(rng, DEFAULT_PLACEMENT_BUDGET);
        let report = game.run().unwrap();

        assert!(report.winner < 2);
        assert_eq!(report.winner_name, "Computer");
        let loser = 1 - report.winner;
        assert!(game.boards()[loser].fleet_sunk());
        assert!(!game.boards()[report.winner].fleet_sunk());
        assert_eq!(game.boards()[loser].sunk_count(), NUM_SHIPS);
        // Sinking ten cells takes at least ten resolved shots.
        assert!(report.shots[report.winner] >= TOTAL_SHIP_CELLS);
    }
}

#[test]
fn test_same_seed_same_match() {
    let run = |seed: u64| {
        let rng = SmallRng::seed_from_u64(seed);
        Game::simulated(rng, DEFAULT_PLACEMENT_BUDGET).run().unwrap()
    };
    let first = run(99);
    let second = run(99);
    assert_eq!(first, second);
}

#[test]
fn test_sunk_count_never_exceeds_fleet() {
    let rng = SmallRng::seed_from_u64(3);
    let mut game = Game::simulated(rng, DEFAULT_PLACEMENT_BUDGET);
    game.run().unwrap();
    for board in game.boards() {
        assert!(board.sunk_count() <= NUM_SHIPS);
    }
}
