/// Fixed board dimension; the game is always played on a 6×6 grid.
pub const BOARD_SIZE: usize = 6;

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 7;

/// Ship lengths placed by the random fleet generator, largest first.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total occupied cells across the fleet.
pub const TOTAL_SHIP_CELLS: usize = 10;

/// Default shared budget of placement attempts for one board build.
/// Tunable via the `--placement-budget` CLI flag.
pub const DEFAULT_PLACEMENT_BUDGET: u32 = 2000;
