//! Ship definition: an anchored linear run of cells with hit tracking.

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Occupied cells extend along columns.
    Horizontal,
    /// Occupied cells extend along rows.
    Vertical,
}

/// A ship anchored at a coordinate, extending `length` cells along its
/// orientation axis. The occupied cell set is derived from these three
/// fields, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    anchor: Coord,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Create a ship with all segments intact. The anchor may lie anywhere;
    /// bounds are checked by the board at placement time.
    pub fn new(anchor: Coord, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length >= 1);
        Self {
            anchor,
            length,
            orientation,
            remaining: length,
        }
    }

    /// Occupied cells in anchor order: cell `i` offsets `i` steps from the
    /// anchor along the orientation axis.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.anchor.offset(0, i),
            Orientation::Vertical => self.anchor.offset(i, 0),
        })
    }

    /// Whether `coord` is one of the ship's occupied cells.
    pub fn occupies(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record a confirmed hit on one of the ship's cells.
    ///
    /// The board guarantees each occupied cell is hit at most once, so this
    /// is called at most `length` times.
    pub fn register_hit(&mut self) {
        debug_assert!(self.remaining > 0);
        self.remaining -= 1;
    }

    /// True once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Segments not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
