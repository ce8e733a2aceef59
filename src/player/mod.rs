//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete
//! implementations:
//! - RandomPlayer: memoryless uniform-random targeting
//! - ConsolePlayer: interactive player reading targets from stdin

use rand::rngs::SmallRng;

use crate::common::Coord;

/// Interface implemented by the two player types.
///
/// A player only decides where to shoot. Boards stay owned by the match
/// controller, which forwards the chosen target to the defending board and
/// re-asks on rejected targets.
pub trait Player {
    /// Display name used in turn headers and the winner announcement.
    fn name(&self) -> &'static str;

    /// Choose the next target coordinate.
    ///
    /// May block on external input; an error (e.g. closed stdin) aborts the
    /// match.
    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord>;
}

pub mod console;
pub use console::{parse_target, ConsolePlayer};

pub mod random;
pub use random::RandomPlayer;
