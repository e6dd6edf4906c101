//! Core engine for Dominoku, a domino-tiled Sudoku variant.
//!
//! The board is a 9×12 grid of the numbers 1–12, split into six 3×4 boxes.
//! A solved board is a Latin-square-style fill (each number exactly once per
//! row, column, and box) whose 108 cells are covered by 54 dominoes. The
//! engine generates puzzles (a partially pre-placed grid plus a queue of
//! dominoes still to place), validates placements and full solutions, and
//! produces hints for the head of the queue.
//!
//! All operations are synchronous and stateless per call: every entry point
//! takes the grid/queue snapshot it operates on and returns a fresh result.
//! Embedders own the live game state between calls.

mod domino;
mod generator;
mod grid;
mod hint;
mod puzzle;
mod rng;
mod tiling;
mod validate;

pub use domino::{Domino, Orientation, Placement, QueuedDomino};
pub use generator::Generator;
pub use grid::{Grid, Position};
pub use hint::{get_hint, HintPlacement, HintResponse};
pub use puzzle::{Difficulty, Puzzle};
pub use tiling::Tiling;
pub use validate::{
    find_valid_moves, submit_solution, validate_placement, PlacementReport, SolutionReport,
};

/// Number of rows in the grid.
pub const GRID_ROWS: usize = 9;
/// Number of columns in the grid.
pub const GRID_COLS: usize = 12;
/// Rows per box.
pub const BOX_ROWS: usize = 3;
/// Columns per box.
pub const BOX_COLS: usize = 4;
/// Smallest cell value.
pub const MIN_VALUE: u8 = 1;
/// Largest cell value; also the number of distinct symbols.
pub const MAX_VALUE: u8 = 12;
/// Dominoes in a complete tiling (108 cells / 2).
pub const DOMINO_COUNT: usize = GRID_ROWS * GRID_COLS / 2;
