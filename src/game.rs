//! Match controller: owns both boards and players and drives the
//! alternating-turn loop until one fleet is gone.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::placement;
use crate::player::{ConsolePlayer, Player, RandomPlayer};
use crate::ui;

/// Outcome of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// Index of the winning player (0 shoots first).
    pub winner: usize,
    /// Winner's display name.
    pub winner_name: &'static str,
    /// Resolved shots per player.
    pub shots: [usize; 2],
}

/// Match controller. `boards[i]` is the fleet owned and defended by player
/// `i`; players never hold board references, every shot goes through the
/// controller.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    rng: SmallRng,
    verbose: bool,
}

impl Game {
    pub fn new(
        players: [Box<dyn Player>; 2],
        boards: [Board; 2],
        rng: SmallRng,
        verbose: bool,
    ) -> Self {
        Self {
            players,
            boards,
            rng,
            verbose,
        }
    }

    /// Standard console game: the human's open board against the
    /// computer's concealed one. The human shoots first.
    pub fn console_game(mut rng: SmallRng, placement_budget: u32) -> Self {
        let human_board = placement::random_board(&mut rng, false, placement_budget);
        let computer_board = placement::random_board(&mut rng, true, placement_budget);
        Self::new(
            [Box::new(ConsolePlayer::new()), Box::new(RandomPlayer::new())],
            [human_board, computer_board],
            rng,
            true,
        )
    }

    /// Silent computer-vs-computer game for batch simulation.
    pub fn simulated(mut rng: SmallRng, placement_budget: u32) -> Self {
        let first = placement::random_board(&mut rng, true, placement_budget);
        let second = placement::random_board(&mut rng, true, placement_budget);
        Self::new(
            [
                Box::new(RandomPlayer::silent()),
                Box::new(RandomPlayer::silent()),
            ],
            [first, second],
            rng,
            false,
        )
    }

    pub fn boards(&self) -> &[Board; 2] {
        &self.boards
    }

    /// Run the match to completion.
    ///
    /// `Hit` and `Sunk` keep the turn with the same player; `Miss` passes
    /// it on. The match ends the moment a defender's fleet is entirely
    /// sunk; sinking is monotonic, so ties are impossible.
    pub fn run(&mut self) -> anyhow::Result<GameReport> {
        let mut shots = [0usize; 2];
        let mut turn = 0usize;
        loop {
            let shooter = turn % 2;
            let defender = 1 - shooter;
            if self.verbose {
                ui::print_boards(&self.boards[0], &self.boards[1]);
                ui::print_rule();
                println!("{}'s turn!", self.players[shooter].name());
            }
            let outcome = self.take_turn(shooter, defender)?;
            shots[shooter] += 1;
            if self.boards[defender].fleet_sunk() {
                let winner_name = self.players[shooter].name();
                log::info!("{} wins after {} shots", winner_name, shots[shooter]);
                if self.verbose {
                    ui::print_boards(&self.boards[0], &self.boards[1]);
                    ui::print_rule();
                    println!("{} wins!", winner_name);
                }
                return Ok(GameReport {
                    winner: shooter,
                    winner_name,
                    shots,
                });
            }
            if !outcome.repeats_turn() {
                turn += 1;
            }
        }
    }

    /// One resolved shot by `shooter` against `defender`'s board.
    ///
    /// Off-board and repeated targets are reported back and asked again
    /// rather than propagated, so invalid input never ends the match.
    fn take_turn(&mut self, shooter: usize, defender: usize) -> anyhow::Result<ShotOutcome> {
        loop {
            let target = self.players[shooter].choose_target(&mut self.rng)?;
            match self.boards[defender].resolve_shot(target) {
                Ok(outcome) => {
                    if self.verbose {
                        println!("{}", ui::outcome_word(outcome));
                    }
                    return Ok(outcome);
                }
                Err(err) => {
                    if self.verbose {
                        println!("{}", err);
                    }
                }
            }
        }
    }
}
