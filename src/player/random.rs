//! Uniform-random targeting without memory of prior shots.

use rand::{rngs::SmallRng, Rng};

use super::Player;
use crate::common::Coord;
use crate::config::BOARD_SIZE;

/// Automated player drawing row and column independently and uniformly
/// from the board range.
///
/// No shot history is kept between calls; repeats are rejected by the
/// defending board and retried by the turn loop, which keeps the
/// observable target distribution uniform over untried cells.
pub struct RandomPlayer {
    announce: bool,
}

impl RandomPlayer {
    /// Player that announces each move on stdout, for console games.
    pub fn new() -> Self {
        Self { announce: true }
    }

    /// Player that stays quiet, for batch simulations.
    pub fn silent() -> Self {
        Self { announce: false }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &'static str {
        "Computer"
    }

    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord> {
        let n = BOARD_SIZE as i32;
        let target = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
        if self.announce {
            println!("Computer's shot: {} {}", target.row + 1, target.col + 1);
        }
        Ok(target)
    }
}
