use crate::domino::{Domino, Orientation, Placement};
use crate::grid::{Grid, Position};
use crate::{BOX_COLS, BOX_ROWS, GRID_COLS, GRID_ROWS, MAX_VALUE, MIN_VALUE};
use serde::{Deserialize, Serialize};

/// Result of checking a candidate domino placement against a grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    pub is_valid: bool,
    /// Offending cell coordinates (`[row, col]`), for UI highlighting.
    pub invalid_cells: Vec<[usize; 2]>,
}

/// Check whether a domino may be placed at `(row, col)` with the given
/// orientation on the current grid. Pure: the grid is not mutated.
///
/// A cell is reported invalid when it is occupied or its face value breaks
/// row/column/box uniqueness, so this agrees exactly with
/// [`Grid::place_domino`]: a valid report guarantees the placement succeeds.
/// An out-of-bounds second cell is reported against the anchor.
pub fn validate_placement(
    grid: &Grid,
    row: usize,
    col: usize,
    domino: Domino,
    orientation: Orientation,
) -> PlacementReport {
    let first = Position::new(row, col);
    let second = match orientation.second_cell(row, col) {
        Some(pos) if first.in_bounds() => pos,
        _ => {
            return PlacementReport {
                is_valid: false,
                invalid_cells: vec![[row, col]],
            }
        }
    };

    let mut invalid_cells = Vec::new();
    if grid.get(first).is_some() || !grid.is_valid_placement(first, domino.num1) {
        invalid_cells.push([first.row, first.col]);
    }
    if grid.get(second).is_some() || !grid.is_valid_placement(second, domino.num2) {
        invalid_cells.push([second.row, second.col]);
    }

    PlacementReport {
        is_valid: invalid_cells.is_empty(),
        invalid_cells,
    }
}

/// All legal placements of a domino on the current grid, scanning every
/// position and both orientations.
pub fn find_valid_moves(grid: &Grid, domino: Domino) -> Vec<Placement> {
    let mut moves = Vec::new();
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if grid.can_place_domino(row, col, domino, orientation) {
                    moves.push(Placement {
                        row,
                        col,
                        orientation,
                        domino,
                    });
                }
            }
        }
    }
    moves
}

/// Result of a full-solution submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionReport {
    pub success: bool,
    pub message: String,
    pub invalid_positions: Vec<[usize; 2]>,
}

/// Re-validate a submitted grid from scratch: every cell filled and in
/// range, no duplicate in any row, column, or 3×4 box. Trusts no placement
/// history; incomplete or malformed grids are flagged, never a panic.
pub fn submit_solution(grid: &Grid) -> SolutionReport {
    if !grid.is_filled() {
        return SolutionReport {
            success: false,
            message: "Puzzle is not complete - it has empty cells".to_string(),
            invalid_positions: Vec::new(),
        };
    }

    let mut invalid_positions = Vec::new();

    // Rows, with the range check folded in.
    for row in 0..GRID_ROWS {
        let mut seen = [false; MAX_VALUE as usize + 1];
        for col in 0..GRID_COLS {
            if let Some(value) = grid.get(Position::new(row, col)) {
                if !(MIN_VALUE..=MAX_VALUE).contains(&value) || seen[value as usize] {
                    invalid_positions.push([row, col]);
                } else {
                    seen[value as usize] = true;
                }
            }
        }
    }

    // Columns.
    for col in 0..GRID_COLS {
        let mut seen = [false; MAX_VALUE as usize + 1];
        for row in 0..GRID_ROWS {
            if let Some(value) = grid.get(Position::new(row, col)) {
                if (MIN_VALUE..=MAX_VALUE).contains(&value) {
                    if seen[value as usize] {
                        invalid_positions.push([row, col]);
                    } else {
                        seen[value as usize] = true;
                    }
                }
            }
        }
    }

    // Boxes.
    for box_row in (0..GRID_ROWS).step_by(BOX_ROWS) {
        for box_col in (0..GRID_COLS).step_by(BOX_COLS) {
            let mut seen = [false; MAX_VALUE as usize + 1];
            for row in box_row..box_row + BOX_ROWS {
                for col in box_col..box_col + BOX_COLS {
                    if let Some(value) = grid.get(Position::new(row, col)) {
                        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
                            if seen[value as usize] {
                                invalid_positions.push([row, col]);
                            } else {
                                seen[value as usize] = true;
                            }
                        }
                    }
                }
            }
        }
    }

    let success = invalid_positions.is_empty();
    SolutionReport {
        message: if success {
            "Puzzle solution is valid!".to_string()
        } else {
            "Puzzle solution has errors".to_string()
        },
        success,
        invalid_positions,
    }
}
