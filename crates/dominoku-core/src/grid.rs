use crate::domino::{Domino, Orientation};
use crate::{BOX_COLS, BOX_ROWS, GRID_COLS, GRID_ROWS, MAX_VALUE, MIN_VALUE};
use serde::{Deserialize, Serialize};

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < GRID_ROWS && self.col < GRID_COLS
    }

    /// Top-left corner of the 3×4 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position::new(
            (self.row / BOX_ROWS) * BOX_ROWS,
            (self.col / BOX_COLS) * BOX_COLS,
        )
    }
}

/// The 9×12 game grid. Each cell holds a value in 1..=12 or is empty.
///
/// Serializes transparently as 9 rows of 12 `integer|null` cells, which is
/// the wire shape embedders exchange with clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Option<u8>; GRID_COLS]; GRID_ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_COLS]; GRID_ROWS],
        }
    }

    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Iterate all positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLS).map(move |col| Position::new(row, col)))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        GRID_ROWS * GRID_COLS - self.filled_count()
    }

    /// Whether every cell holds a value.
    ///
    /// This is only an emptiness check; rule validity is re-established by
    /// [`crate::submit_solution`], which trusts no placement history.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    /// Check whether `num` may be written at `pos` under the uniqueness
    /// rules: in range, not already in the row, the column, or the 3×4 box.
    ///
    /// The target cell's own content is not consulted; occupancy is a
    /// separate concern checked by the domino primitives.
    pub fn is_valid_placement(&self, pos: Position, num: u8) -> bool {
        if !pos.in_bounds() || !(MIN_VALUE..=MAX_VALUE).contains(&num) {
            return false;
        }

        // Row
        if self.cells[pos.row].iter().any(|&c| c == Some(num)) {
            return false;
        }

        // Column
        if (0..GRID_ROWS).any(|r| self.cells[r][pos.col] == Some(num)) {
            return false;
        }

        // Box
        let origin = pos.box_origin();
        for r in origin.row..origin.row + BOX_ROWS {
            for c in origin.col..origin.col + BOX_COLS {
                if self.cells[r][c] == Some(num) {
                    return false;
                }
            }
        }

        true
    }

    /// Check whether a domino could be placed, without mutating the grid:
    /// both cells in bounds, both empty, both face values rule-valid.
    pub fn can_place_domino(
        &self,
        row: usize,
        col: usize,
        domino: Domino,
        orientation: Orientation,
    ) -> bool {
        let first = Position::new(row, col);
        if !first.in_bounds() {
            return false;
        }
        let second = match orientation.second_cell(row, col) {
            Some(pos) => pos,
            None => return false,
        };

        if self.get(first).is_some() || self.get(second).is_some() {
            return false;
        }

        self.is_valid_placement(first, domino.num1) && self.is_valid_placement(second, domino.num2)
    }

    /// Place a domino on the grid.
    ///
    /// All-or-nothing: on any failure (out of bounds, overlap, rule
    /// violation) the grid is left untouched and `false` is returned, so
    /// callers can retry without cleanup.
    pub fn place_domino(
        &mut self,
        row: usize,
        col: usize,
        domino: Domino,
        orientation: Orientation,
    ) -> bool {
        let first = Position::new(row, col);
        let second = match orientation.second_cell(row, col) {
            Some(pos) => pos,
            None => return false,
        };
        if !first.in_bounds() || self.get(first).is_some() || self.get(second).is_some() {
            return false;
        }
        if !self.is_valid_placement(first, domino.num1)
            || !self.is_valid_placement(second, domino.num2)
        {
            return false;
        }

        self.cells[row][col] = Some(domino.num1);
        self.cells[second.row][second.col] = Some(domino.num2);
        true
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_idx, row) in self.cells.iter().enumerate() {
            if row_idx > 0 && row_idx % BOX_ROWS == 0 {
                writeln!(f, "{}", "-".repeat(GRID_COLS * 3 + GRID_COLS / BOX_COLS - 1))?;
            }
            for (col_idx, cell) in row.iter().enumerate() {
                if col_idx > 0 && col_idx % BOX_COLS == 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Some(v) => write!(f, "{v:>3}")?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
