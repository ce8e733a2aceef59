//! Game board: cell grid, placement with the no-touching buffer, and the
//! shot state machine.

use core::fmt;

use crate::cellset::CellSet;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// State of a single grid cell.
///
/// Transitions only move forward: `Empty → Ship` at placement, then
/// `Ship → Hit`, `Empty → Miss` or `Empty → SunkBuffer` at shot resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Water shaded around a sunk ship; known to hold nothing.
    SunkBuffer,
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss | Cell::SunkBuffer => '.',
        }
    }
}

/// Cells unavailable for placement or targeting: occupied, adjacent to a
/// ship, or already fired upon. 36 cells pack into a `u64`.
type Busy = CellSet<u64, BOARD_SIZE>;

/// One player's grid, fleet and shot history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    conceal: bool,
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    busy: Busy,
    ships: Vec<Ship>,
    sunk: usize,
}

impl Board {
    /// Create an empty board. With `conceal` set, unharmed ship cells
    /// render as open water.
    pub fn new(conceal: bool) -> Self {
        Self {
            conceal,
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            busy: Busy::new(),
            ships: Vec::new(),
            sunk: 0,
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&coord.row) && (0..n).contains(&coord.col)
    }

    /// Place a ship, rejecting the whole placement before any mutation if a
    /// cell leaves the board or lands on a busy cell. On success the ship's
    /// cells are marked on the grid and its 8-neighborhood outline joins
    /// the busy set silently, keeping later ships from touching it.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        let cells: Vec<Coord> = ship.cells().collect();
        for &cell in &cells {
            if !self.in_bounds(cell) || self.busy.contains(cell)? {
                return Err(BoardError::LayoutConflict);
            }
        }
        for &cell in &cells {
            self.grid[cell.row as usize][cell.col as usize] = Cell::Ship;
            self.busy.insert(cell)?;
        }
        self.shade_outline(&cells, false)?;
        self.ships.push(ship);
        Ok(())
    }

    /// Forget everything the busy set tracked during placement so shot
    /// tracking starts clean. The fleet layout itself lives in the grid and
    /// ship list and is untouched.
    pub fn clear_shot_history(&mut self) {
        self.busy.clear();
    }

    /// Resolve a shot at `coord`.
    ///
    /// The target joins the busy set unconditionally, so no cell can be
    /// resolved twice. A hit that takes a ship's last segment shades the
    /// ship's outline as known water and reports `Sunk`.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.in_bounds(coord) {
            return Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        if self.busy.contains(coord)? {
            return Err(BoardError::AlreadyTargeted {
                row: coord.row,
                col: coord.col,
            });
        }
        self.busy.insert(coord)?;

        if let Some(idx) = self.ships.iter().position(|s| s.occupies(coord)) {
            self.grid[coord.row as usize][coord.col as usize] = Cell::Hit;
            self.ships[idx].register_hit();
            if self.ships[idx].is_sunk() {
                self.sunk += 1;
                let cells: Vec<Coord> = self.ships[idx].cells().collect();
                self.shade_outline(&cells, true)?;
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.grid[coord.row as usize][coord.col as usize] = Cell::Miss;
        Ok(ShotOutcome::Miss)
    }

    /// Add the 8-neighborhood of every cell in `cells` to the busy set,
    /// bounds-clipped. With `mark` set the newly shaded water also becomes
    /// visible on the grid (the kill zone around a sunk ship).
    ///
    /// Cells already busy are skipped, so a sunk ship's own hits and any
    /// earlier misses keep their state. The no-adjacency invariant means no
    /// other ship's cells can lie inside the outline.
    fn shade_outline(&mut self, cells: &[Coord], mark: bool) -> Result<(), BoardError> {
        for &cell in cells {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let near = cell.offset(dr, dc);
                    if self.in_bounds(near) && !self.busy.contains(near)? {
                        if mark {
                            self.grid[near.row as usize][near.col as usize] = Cell::SunkBuffer;
                        }
                        self.busy.insert(near)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// True once every placed ship is sunk.
    pub fn fleet_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// State of the cell at `coord`, or `None` outside the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.grid[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    /// Number of cells currently tracked as busy.
    pub fn busy_cells(&self) -> usize {
        self.busy.len()
    }
}

impl fmt::Display for Board {
    /// Labeled row/column table. Concealed boards render unharmed ship
    /// cells as open water; hits, misses and sunk shading stay visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {} |", col)?;
        }
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                let glyph = if self.conceal && *cell == Cell::Ship {
                    Cell::Empty.glyph()
                } else {
                    cell.glyph()
                };
                write!(f, " {} |", glyph)?;
            }
        }
        Ok(())
    }
}
