use crate::grid::Position;
use crate::{GRID_COLS, GRID_ROWS};
use serde::{Deserialize, Serialize};

/// A domino piece: two face values, each in 1..=12.
///
/// The pair is directional for placement purposes (`num1` goes on the anchor
/// cell) but a domino with unequal faces may be flipped without changing its
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domino {
    pub num1: u8,
    pub num2: u8,
}

impl Domino {
    pub fn new(num1: u8, num2: u8) -> Self {
        Self { num1, num2 }
    }

    /// The same piece with its faces swapped.
    pub fn flipped(&self) -> Self {
        Self {
            num1: self.num2,
            num2: self.num1,
        }
    }

    /// Whether flipping produces a distinct placement (unequal faces).
    pub fn is_flippable(&self) -> bool {
        self.num1 != self.num2
    }
}

impl std::fmt::Display for Domino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.num1, self.num2)
    }
}

/// Orientation of a domino on the grid.
///
/// Horizontal occupies `(row, col)` and `(row, col + 1)`; vertical occupies
/// `(row, col)` and `(row + 1, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The cell paired with the anchor cell, if it lies within the grid.
    pub fn second_cell(&self, row: usize, col: usize) -> Option<Position> {
        match self {
            Orientation::Horizontal if col + 1 < GRID_COLS => Some(Position::new(row, col + 1)),
            Orientation::Vertical if row + 1 < GRID_ROWS => Some(Position::new(row + 1, col)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A domino bound to a grid position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub domino: Domino,
}

impl Placement {
    /// Both occupied cells, anchor first. The second cell is only meaningful
    /// when the placement was built in-bounds, which the tiling engine
    /// guarantees.
    pub fn cells(&self) -> [Position; 2] {
        let second = match self.orientation {
            Orientation::Horizontal => Position::new(self.row, self.col + 1),
            Orientation::Vertical => Position::new(self.row + 1, self.col),
        };
        [Position::new(self.row, self.col), second]
    }
}

/// A queue entry: the domino the player must place next, carrying its
/// position in the originating tiling as a solution hint.
///
/// The `_solution*` wire names are private bookkeeping for the hint engine;
/// clients are expected to pass them back untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedDomino {
    pub num1: u8,
    pub num2: u8,
    #[serde(rename = "_solutionRow")]
    pub solution_row: usize,
    #[serde(rename = "_solutionCol")]
    pub solution_col: usize,
    #[serde(rename = "_solutionOrientation")]
    pub solution_orientation: Orientation,
}

impl QueuedDomino {
    pub fn from_placement(placement: &Placement) -> Self {
        Self {
            num1: placement.domino.num1,
            num2: placement.domino.num2,
            solution_row: placement.row,
            solution_col: placement.col,
            solution_orientation: placement.orientation,
        }
    }

    /// The bare piece, without solution bookkeeping.
    pub fn domino(&self) -> Domino {
        Domino::new(self.num1, self.num2)
    }

    /// The recorded position in the originating tiling.
    pub fn solution_placement(&self) -> Placement {
        Placement {
            row: self.solution_row,
            col: self.solution_col,
            orientation: self.solution_orientation,
            domino: self.domino(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipped_swaps_faces() {
        let d = Domino::new(3, 7);
        assert_eq!(d.flipped(), Domino::new(7, 3));
        assert!(d.is_flippable());
        assert!(!Domino::new(5, 5).is_flippable());
    }

    #[test]
    fn second_cell_respects_bounds() {
        assert_eq!(
            Orientation::Horizontal.second_cell(0, 0),
            Some(Position::new(0, 1))
        );
        assert_eq!(Orientation::Horizontal.second_cell(0, 11), None);
        assert_eq!(
            Orientation::Vertical.second_cell(7, 3),
            Some(Position::new(8, 3))
        );
        assert_eq!(Orientation::Vertical.second_cell(8, 3), None);
    }

    #[test]
    fn orientation_wire_tokens_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&Orientation::Horizontal).unwrap(),
            "\"horizontal\""
        );
        let o: Orientation = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(o, Orientation::Vertical);
    }

    #[test]
    fn queued_domino_wire_shape() {
        let q = QueuedDomino {
            num1: 1,
            num2: 2,
            solution_row: 4,
            solution_col: 7,
            solution_orientation: Orientation::Vertical,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["_solutionRow"], 4);
        assert_eq!(json["_solutionCol"], 7);
        assert_eq!(json["_solutionOrientation"], "vertical");
    }
}
