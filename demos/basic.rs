//! Basic example of using the Dominoku engine

use dominoku_core::{get_hint, submit_solution, validate_placement, Difficulty, Generator};

fn main() {
    env_logger::init();

    // Generate a puzzle
    println!("Generating a medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Medium);

    println!("Initial grid:");
    println!("{}", puzzle.grid);

    // Show some stats
    println!("Pre-filled cells: {}", puzzle.grid.filled_count());
    println!("Dominoes in queue: {}\n", puzzle.domino_queue.len());

    // Ask for a hint for the first queued domino
    let response = get_hint(&puzzle.grid, &puzzle.domino_queue);
    let hint = match response.hint {
        Some(hint) => hint,
        None => {
            println!("No hint available: {:?}", response.message);
            return;
        }
    };
    let first = puzzle.domino_queue[0];
    println!(
        "Hint: place {} at ({}, {}) {}{}",
        first.domino(),
        hint.row,
        hint.col,
        hint.orientation,
        if hint.flipped { " (flipped)" } else { "" }
    );

    // Validate the hinted placement, then apply it
    let mut domino = first.domino();
    if hint.flipped {
        domino = domino.flipped();
    }
    let report = validate_placement(&puzzle.grid, hint.row, hint.col, domino, hint.orientation);
    println!("Placement valid: {}", report.is_valid);

    let mut grid = puzzle.grid;
    if grid.place_domino(hint.row, hint.col, domino, hint.orientation) {
        println!("\nGrid after following the hint:");
        println!("{grid}");
    }

    // A partial grid is not an acceptable solution
    let submission = submit_solution(&grid);
    println!(
        "Submission accepted: {} ({})",
        submission.success, submission.message
    );
}
