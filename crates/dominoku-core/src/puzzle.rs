use crate::domino::{Domino, QueuedDomino};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::tiling::Tiling;
use serde::{Deserialize, Serialize};

/// Difficulty level of a puzzle, controlling how many dominoes are
/// pre-placed as given clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Target number of pre-placed dominoes for this level.
    pub fn pre_placed_target(&self) -> usize {
        match self {
            Difficulty::Easy => 27,
            Difficulty::Medium => 20,
            Difficulty::Hard => 14,
        }
    }

    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A playable puzzle: a partially filled grid plus the ordered queue of
/// dominoes the player must place.
///
/// The grid and the queue's recorded solution placements together
/// reconstruct exactly one full tiling of one solved grid, so a generated
/// puzzle is always completable by replaying the recorded solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub grid: Grid,
    pub domino_queue: Vec<QueuedDomino>,
    pub is_solvable: bool,
}

/// Split a tiling into pre-placed clues and the play queue.
pub(crate) fn assemble(tiling: Tiling, difficulty: Difficulty, rng: &mut SimpleRng) -> Puzzle {
    let mut placements = tiling.into_placements();
    rng.shuffle(&mut placements);

    // Clamp so the queue is never empty.
    let target = difficulty
        .pre_placed_target()
        .min(placements.len().saturating_sub(1));

    let mut grid = Grid::new();
    let mut queue = Vec::with_capacity(placements.len() - target);
    let mut placed = 0;

    for placement in &placements {
        if placed < target {
            let ok = grid.place_domino(
                placement.row,
                placement.col,
                placement.domino,
                placement.orientation,
            );
            // Placements come from one real tiling of one real solved grid,
            // so replaying them onto an empty grid cannot conflict.
            assert!(ok, "tiling placement failed to replay onto the clue grid");
            placed += 1;
        } else {
            queue.push(QueuedDomino::from_placement(placement));
        }
    }

    rng.shuffle(&mut queue);
    let queue = spread_consecutive_values(queue);

    log::debug!(
        "assembled {difficulty} puzzle: {placed} pre-placed, {} queued",
        queue.len()
    );

    Puzzle {
        grid,
        domino_queue: queue,
        is_solvable: true,
    }
}

/// Whether any pairing of the two dominoes' faces differs by exactly 1.
fn consecutive_values(a: Domino, b: Domino) -> bool {
    [a.num1, a.num2]
        .iter()
        .any(|&x| [b.num1, b.num2].iter().any(|&y| x.abs_diff(y) == 1))
}

/// Greedy reorder of an already-shuffled queue that avoids emitting two
/// consecutive-valued dominoes back to back. Best effort only: when every
/// remaining candidate is consecutive with the last emitted domino, the
/// next pool item is taken unconditionally.
fn spread_consecutive_values(mut pool: Vec<QueuedDomino>) -> Vec<QueuedDomino> {
    let mut result = Vec::with_capacity(pool.len());
    if pool.is_empty() {
        return result;
    }
    result.push(pool.remove(0));

    while !pool.is_empty() {
        let last = result[result.len() - 1].domino();
        let pick = pool
            .iter()
            .position(|candidate| !consecutive_values(last, candidate.domino()))
            .unwrap_or(0);
        result.push(pool.remove(pick));
    }

    result
}
