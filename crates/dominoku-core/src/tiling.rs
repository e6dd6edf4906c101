//! Domino tiling engine.
//!
//! Partitions the 108 cells of a solved grid into exactly 54 dominoes via
//! backtracking exact cover: take the first uncovered cell in row-major
//! order, pair it with its right or down neighbor, recurse, and undo on
//! failure. A full 9×12 rectangle always admits a complete tiling, so the
//! backtracking exists to recover from dead ends introduced by the
//! randomized direction order and the orientation-balance bias, not to
//! decide feasibility.

use crate::domino::{Domino, Orientation, Placement};
use crate::grid::{Grid, Position};
use crate::rng::SimpleRng;
use crate::{DOMINO_COUNT, GRID_COLS, GRID_ROWS};

/// A complete tiling: 54 disjoint dominoes covering every cell, each
/// carrying the face values read off the solved grid it was built from.
#[derive(Debug, Clone)]
pub struct Tiling {
    placements: Vec<Placement>,
}

impl Tiling {
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Tile a solved grid. Panics if the grid is not fully filled or if the
/// search ends in a state violating the tiling invariants; both indicate a
/// logic bug upstream, never a user-facing condition.
pub(crate) fn tile(solved: &Grid, rng: &mut SimpleRng) -> Tiling {
    assert!(solved.is_filled(), "tiling requires a fully filled grid");

    let mut values = [[0u8; GRID_COLS]; GRID_ROWS];
    for pos in Grid::positions() {
        if let Some(v) = solved.get(pos) {
            values[pos.row][pos.col] = v;
        }
    }

    let mut search = CoverSearch {
        values,
        used: [[false; GRID_COLS]; GRID_ROWS],
        placements: Vec::with_capacity(DOMINO_COUNT),
        horizontal: 0,
        vertical: 0,
        rng,
    };
    let covered = search.cover();
    assert!(covered, "domino cover search failed on a full rectangle");

    let tiling = Tiling {
        placements: search.placements,
    };
    verify(&tiling);

    log::debug!(
        "tiled grid with {} dominoes ({} horizontal, {} vertical)",
        tiling.len(),
        search.horizontal,
        search.vertical
    );
    tiling
}

struct CoverSearch<'a> {
    values: [[u8; GRID_COLS]; GRID_ROWS],
    used: [[bool; GRID_COLS]; GRID_ROWS],
    placements: Vec<Placement>,
    horizontal: usize,
    vertical: usize,
    rng: &'a mut SimpleRng,
}

impl CoverSearch<'_> {
    fn cover(&mut self) -> bool {
        let start = match self.first_uncovered() {
            Some(pos) => pos,
            // Every cell covered: the tiling is complete.
            None => return true,
        };

        for orientation in self.direction_order() {
            let second = match orientation.second_cell(start.row, start.col) {
                Some(pos) => pos,
                None => continue,
            };
            if self.used[second.row][second.col] {
                continue;
            }

            self.used[start.row][start.col] = true;
            self.used[second.row][second.col] = true;
            self.placements.push(Placement {
                row: start.row,
                col: start.col,
                orientation,
                domino: Domino::new(
                    self.values[start.row][start.col],
                    self.values[second.row][second.col],
                ),
            });
            match orientation {
                Orientation::Horizontal => self.horizontal += 1,
                Orientation::Vertical => self.vertical += 1,
            }

            if self.cover() {
                return true;
            }

            // Dead end further down: undo and try the other direction.
            self.used[start.row][start.col] = false;
            self.used[second.row][second.col] = false;
            self.placements.pop();
            match orientation {
                Orientation::Horizontal => self.horizontal -= 1,
                Orientation::Vertical => self.vertical -= 1,
            }
        }

        false
    }

    fn first_uncovered(&self) -> Option<Position> {
        Grid::positions().find(|pos| !self.used[pos.row][pos.col])
    }

    /// Shuffled direction order with a soft orientation-balance bias: once
    /// one orientation leads by more than 3, try the lagging one first 80%
    /// of the time. Both directions stay in the search, so completeness is
    /// unaffected.
    fn direction_order(&mut self) -> [Orientation; 2] {
        let mut dirs = [Orientation::Horizontal, Orientation::Vertical];
        self.rng.shuffle(&mut dirs);

        if self.horizontal > self.vertical + 3 && self.rng.chance(0.8) {
            dirs = [Orientation::Vertical, Orientation::Horizontal];
        } else if self.vertical > self.horizontal + 3 && self.rng.chance(0.8) {
            dirs = [Orientation::Horizontal, Orientation::Vertical];
        }
        dirs
    }
}

/// Post-condition check: exactly 54 placements, pairwise disjoint, covering
/// all 108 cells. A violation is a logic bug and panics rather than letting
/// a corrupt tiling escape.
fn verify(tiling: &Tiling) {
    assert_eq!(
        tiling.len(),
        DOMINO_COUNT,
        "tiling must contain exactly {DOMINO_COUNT} dominoes"
    );

    let mut covered = [[false; GRID_COLS]; GRID_ROWS];
    for placement in tiling.placements() {
        for cell in placement.cells() {
            assert!(cell.in_bounds(), "tiling placement out of bounds");
            assert!(
                !covered[cell.row][cell.col],
                "tiling placements overlap at {cell:?}"
            );
            covered[cell.row][cell.col] = true;
        }
    }
    assert!(
        covered.iter().flatten().all(|&c| c),
        "tiling leaves uncovered cells"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;

    fn solved_and_tiled(seed: u64) -> (Grid, Tiling) {
        let mut generator = Generator::with_seed(seed);
        let solved = generator.solved_grid();
        let mut rng = SimpleRng::with_seed(seed.wrapping_add(1));
        let tiling = tile(&solved, &mut rng);
        (solved, tiling)
    }

    #[test]
    fn tiling_covers_all_cells_disjointly() {
        let (_, tiling) = solved_and_tiled(42);
        assert_eq!(tiling.len(), DOMINO_COUNT);

        let mut covered = [[false; GRID_COLS]; GRID_ROWS];
        for placement in tiling.placements() {
            for cell in placement.cells() {
                assert!(!covered[cell.row][cell.col]);
                covered[cell.row][cell.col] = true;
            }
        }
        assert!(covered.iter().flatten().all(|&c| c));
    }

    #[test]
    fn tiling_face_values_match_the_solved_grid() {
        let (solved, tiling) = solved_and_tiled(7);
        for placement in tiling.placements() {
            let [first, second] = placement.cells();
            assert_eq!(solved.get(first), Some(placement.domino.num1));
            assert_eq!(solved.get(second), Some(placement.domino.num2));
        }
    }

    #[test]
    fn tiling_uses_both_orientations() {
        let (_, tiling) = solved_and_tiled(99);
        let horizontal = tiling
            .placements()
            .iter()
            .filter(|p| p.orientation == Orientation::Horizontal)
            .count();
        assert!(horizontal > 0);
        assert!(horizontal < DOMINO_COUNT);
    }

    #[test]
    #[should_panic(expected = "fully filled")]
    fn tiling_rejects_partial_grids() {
        let mut rng = SimpleRng::with_seed(1);
        tile(&Grid::new(), &mut rng);
    }
}
