//! Random fleet generation under a shared placement-attempt budget.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::{Orientation, Ship};

/// Build a board with the standard fleet placed at random.
///
/// The attempt budget is shared across all ships of the build, not
/// per-ship. `LayoutConflict` rejections burn attempts and retry; once the
/// budget runs out the partially filled board is abandoned and
/// `PlacementExhausted` returned. On success the board's shot history is
/// cleared so play starts with an empty busy set.
pub fn random_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    conceal: bool,
    budget: u32,
) -> Result<Board, BoardError> {
    let mut board = Board::new(conceal);
    let mut attempts: u32 = 0;
    for &length in FLEET.iter() {
        loop {
            if attempts >= budget {
                return Err(BoardError::PlacementExhausted { attempts });
            }
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // Anchor ranges where a ship of this length stays in bounds.
            let (rows, cols) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE, BOARD_SIZE - length + 1),
                Orientation::Vertical => (BOARD_SIZE - length + 1, BOARD_SIZE),
            };
            let anchor = Coord::new(
                rng.random_range(0..rows as i32),
                rng.random_range(0..cols as i32),
            );
            match board.place(Ship::new(anchor, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::LayoutConflict) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    log::debug!("fleet placed in {} attempts", attempts);
    board.clear_shot_history();
    Ok(board)
}

/// Build a board, restarting from scratch whenever a build exhausts its
/// budget. Each attempt succeeds with high probability on the standard
/// board, so the outer retry is unbounded.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, conceal: bool, budget: u32) -> Board {
    loop {
        match random_fleet(rng, conceal, budget) {
            Ok(board) => return board,
            Err(err) => log::debug!("board discarded: {}", err),
        }
    }
}
