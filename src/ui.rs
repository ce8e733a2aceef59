//! Console presentation: greeting banner, board printing, outcome words.

use crate::board::Board;
use crate::common::ShotOutcome;

const RULE: &str = "---------------------------";

pub fn print_rule() {
    println!("{}", RULE);
}

/// Greeting banner with firing instructions.
pub fn print_greeting() {
    println!("{}", RULE);
    println!("--------SEA--BATTLE--------");
    println!("{}", RULE);
    println!("-------Instructions:-------");
    println!("---To fire, enter: X Y-----");
    println!("------X - row number-------");
    println!("-----Y - column number-----");
    println!("{}", RULE);
}

/// Both boards, the player's own first.
pub fn print_boards(own: &Board, enemy: &Board) {
    print_rule();
    println!("Player's board:");
    println!("{}", own);
    print_rule();
    println!("Computer's board:");
    println!("{}", enemy);
}

/// One-word report for a resolved shot.
pub fn outcome_word(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Missed",
        ShotOutcome::Hit => "Hit",
        ShotOutcome::Sunk => "Sunk",
    }
}
