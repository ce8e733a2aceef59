//! Interactive player reading shot coordinates from stdin.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use super::Player;
use crate::common::Coord;

/// Player that prompts on stdout and reads targets from stdin, re-asking
/// until a line parses.
pub struct ConsolePlayer;

impl ConsolePlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a line of user input into a board coordinate.
///
/// Expects exactly two whitespace-separated non-negative integers: the
/// 1-based row and column. Returns a message to show the user when the
/// line is malformed. Bounds are not checked here; the board rejects
/// off-board targets itself, so "0 0" parses fine and fails downstream.
pub fn parse_target(line: &str) -> Result<Coord, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err("Enter exactly 2 coordinates!".to_string());
    }
    let row: i32 = tokens[0]
        .parse()
        .map_err(|_| "Coordinates must be numbers!".to_string())?;
    let col: i32 = tokens[1]
        .parse()
        .map_err(|_| "Coordinates must be numbers!".to_string())?;
    if row < 0 || col < 0 {
        return Err("Coordinates must be numbers!".to_string());
    }
    Ok(Coord::new(row - 1, col - 1))
}

impl Player for ConsolePlayer {
    fn name(&self) -> &'static str {
        "Player"
    }

    fn choose_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coord> {
        loop {
            print!("Your shot: ");
            io::stdout().flush()?;
            let mut line = String::new();
            let read = io::stdin().read_line(&mut line)?;
            if read == 0 {
                anyhow::bail!("input closed before the match finished");
            }
            match parse_target(&line) {
                Ok(coord) => return Ok(coord),
                Err(msg) => println!("{}", msg),
            }
        }
    }
}
