use crate::domino::{Orientation, Placement, QueuedDomino};
use crate::grid::{Grid, Position};
use crate::validate::find_valid_moves;
use serde::{Deserialize, Serialize};

/// A suggested placement for the head-of-queue domino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintPlacement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    /// Whether the domino must be flipped (faces swapped) to fit here.
    pub flipped: bool,
}

/// Result of a hint request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<HintPlacement>,
    /// Set when no placement exists anywhere for the current domino; the
    /// puzzle may be unsolvable from this state and the caller should offer
    /// a restart. Omitted from the wire unless set.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dead_end: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HintResponse {
    fn found(hint: HintPlacement) -> Self {
        Self {
            success: true,
            hint: Some(hint),
            dead_end: false,
            message: None,
        }
    }
}

/// Find a placement for the first domino in the queue.
///
/// Fast path: the recorded solution placement, when its cells are still
/// free and rule-valid, is returned unflipped — it comes from a genuine
/// solved tiling. Otherwise the grid is scanned exhaustively for the domino
/// and its flipped variant, preferring placements that put no face value
/// orthogonally next to a consecutive number.
pub fn get_hint(grid: &Grid, domino_queue: &[QueuedDomino]) -> HintResponse {
    let current = match domino_queue.first() {
        Some(domino) => domino,
        None => {
            return HintResponse {
                success: false,
                hint: None,
                dead_end: false,
                message: Some("No dominoes left to place".to_string()),
            }
        }
    };

    let sol = current.solution_placement();
    if grid.can_place_domino(sol.row, sol.col, sol.domino, sol.orientation) {
        return HintResponse::found(HintPlacement {
            row: sol.row,
            col: sol.col,
            orientation: sol.orientation,
            flipped: false,
        });
    }

    log::debug!(
        "recorded solution for {} is no longer valid, scanning alternatives",
        current.domino()
    );

    let domino = current.domino();
    let variants = if domino.is_flippable() {
        vec![(domino, false), (domino.flipped(), true)]
    } else {
        vec![(domino, false)]
    };

    let mut fallback = None;
    for (variant, flipped) in variants {
        for placement in find_valid_moves(grid, variant) {
            let hint = HintPlacement {
                row: placement.row,
                col: placement.col,
                orientation: placement.orientation,
                flipped,
            };
            if !creates_consecutive_adjacency(grid, &placement) {
                return HintResponse::found(hint);
            }
            if fallback.is_none() {
                fallback = Some(hint);
            }
        }
    }

    if let Some(hint) = fallback {
        log::debug!("only consecutive-creating placements remain for {domino}");
        return HintResponse::found(hint);
    }

    HintResponse {
        success: false,
        hint: None,
        dead_end: true,
        message: Some(
            "No valid placement found for the current domino. The puzzle may be unsolvable, \
             try starting a new game."
                .to_string(),
        ),
    }
}

/// Whether placing the domino would put either face value orthogonally next
/// to an already-filled cell holding a consecutive number. The partner cell
/// of the domino itself is not counted.
fn creates_consecutive_adjacency(grid: &Grid, placement: &Placement) -> bool {
    let [first, second] = placement.cells();
    face_has_consecutive_neighbor(grid, first, placement.domino.num1, second)
        || face_has_consecutive_neighbor(grid, second, placement.domino.num2, first)
}

fn face_has_consecutive_neighbor(grid: &Grid, cell: Position, num: u8, partner: Position) -> bool {
    const DIRS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

    for (dr, dc) in DIRS {
        let row = cell.row as i32 + dr;
        let col = cell.col as i32 + dc;
        if row < 0 || col < 0 {
            continue;
        }
        let neighbor = Position::new(row as usize, col as usize);
        if !neighbor.in_bounds() || neighbor == partner {
            continue;
        }
        if let Some(value) = grid.get(neighbor) {
            if value.abs_diff(num) == 1 {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domino::Domino;
    use crate::generator::Generator;
    use crate::puzzle::Difficulty;
    use crate::validate::validate_placement;

    fn queued(num1: u8, num2: u8, row: usize, col: usize, orientation: Orientation) -> QueuedDomino {
        QueuedDomino {
            num1,
            num2,
            solution_row: row,
            solution_col: col,
            solution_orientation: orientation,
        }
    }

    #[test]
    fn fast_path_returns_the_recorded_solution() {
        let grid = Grid::new();
        let queue = vec![queued(1, 2, 3, 4, Orientation::Vertical)];

        let response = get_hint(&grid, &queue);
        assert!(response.success);
        let hint = response.hint.unwrap();
        assert_eq!((hint.row, hint.col), (3, 4));
        assert_eq!(hint.orientation, Orientation::Vertical);
        assert!(!hint.flipped);
    }

    #[test]
    fn hint_satisfies_validate_placement() {
        let puzzle = Generator::with_seed(42).generate(Difficulty::Hard);
        let response = get_hint(&puzzle.grid, &puzzle.domino_queue);
        assert!(response.success);

        let hint = response.hint.unwrap();
        let mut domino = puzzle.domino_queue[0].domino();
        if hint.flipped {
            domino = domino.flipped();
        }
        let report = validate_placement(&puzzle.grid, hint.row, hint.col, domino, hint.orientation);
        assert!(report.is_valid);
    }

    #[test]
    fn blocked_solution_falls_back_to_scanning() {
        let mut grid = Grid::new();
        // Occupy the recorded anchor so the fast path is rejected.
        grid.set(Position::new(0, 0), Some(7));
        let queue = vec![queued(1, 2, 0, 0, Orientation::Horizontal)];

        let response = get_hint(&grid, &queue);
        assert!(response.success);
        let hint = response.hint.unwrap();
        assert!((hint.row, hint.col) != (0, 0));
    }

    #[test]
    fn full_grid_reports_a_dead_end() {
        let grid = Generator::with_seed(6).solved_grid();
        let queue = vec![queued(1, 2, 0, 0, Orientation::Horizontal)];

        let response = get_hint(&grid, &queue);
        assert!(!response.success);
        assert!(response.dead_end);
        assert!(response.hint.is_none());
        assert!(response.message.is_some());
    }

    #[test]
    fn empty_queue_is_not_a_dead_end() {
        let response = get_hint(&Grid::new(), &[]);
        assert!(!response.success);
        assert!(!response.dead_end);
        assert_eq!(response.message.as_deref(), Some("No dominoes left to place"));
    }

    #[test]
    fn consecutive_adjacency_detection() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 2), Some(4));

        // The 5 lands at (0,1), orthogonally next to the 4.
        let touching = Placement {
            row: 0,
            col: 0,
            orientation: Orientation::Horizontal,
            domino: Domino::new(9, 5),
        };
        assert!(creates_consecutive_adjacency(&grid, &touching));

        // Same shape far away from the 4.
        let clear = Placement {
            row: 5,
            col: 6,
            orientation: Orientation::Horizontal,
            domino: Domino::new(9, 5),
        };
        assert!(!creates_consecutive_adjacency(&grid, &clear));

        // The partner cell itself never counts as a neighbor.
        let partners = Placement {
            row: 8,
            col: 0,
            orientation: Orientation::Horizontal,
            domino: Domino::new(6, 7),
        };
        assert!(!creates_consecutive_adjacency(&grid, &partners));
    }

    #[test]
    fn hint_wire_shape_uses_dead_end_key() {
        let response = get_hint(&Generator::with_seed(6).solved_grid(), &[queued(
            1,
            2,
            0,
            0,
            Orientation::Horizontal,
        )]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["deadEnd"], true);
        assert_eq!(json["success"], false);
        assert!(json.get("hint").is_none());
    }

    #[test]
    fn successful_hint_omits_the_dead_end_key() {
        let response = get_hint(&Grid::new(), &[queued(1, 2, 0, 0, Orientation::Horizontal)]);
        assert!(response.success);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("deadEnd").is_none());
        assert!(json.get("message").is_none());

        // Deserializing a wire response without the key still works.
        let back: HintResponse = serde_json::from_value(json).unwrap();
        assert!(!back.dead_end);
    }
}
