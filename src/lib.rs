//! Console sea-battle: a 6×6 battleship variant played against a
//! uniform-random computer opponent.
//!
//! The engine is the interesting part: [`Board`] enforces the placement
//! rules (ships never touch, even diagonally) and runs the shot state
//! machine; [`Ship`] derives its occupied cells from anchor, length and
//! orientation; [`random_board`] builds fleets under a shared attempt
//! budget. [`Game`] wires two [`Player`] implementations to the two boards
//! and drives the alternating-turn loop.

mod board;
mod cellset;
mod common;
pub mod config;
mod game;
mod logging;
mod placement;
pub mod player;
mod ship;
pub mod ui;

pub use board::{Board, Cell};
pub use cellset::{CellSet, CellSetError};
pub use common::{BoardError, Coord, ShotOutcome};
pub use game::{Game, GameReport};
pub use logging::init_logging;
pub use placement::{random_board, random_fleet};
pub use player::{parse_target, ConsolePlayer, Player, RandomPlayer};
pub use ship::{Orientation, Ship};
