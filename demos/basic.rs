//! Basic walkthrough of the engine API.

use sudoku_engine::{Carver, Difficulty, Game, GameStatus, Generator, Position};

fn main() {
    env_logger::init();

    // Generate a solved grid
    let mut generator = Generator::new();
    let solution = generator.generate();
    println!("Solution:");
    println!("{}", solution);

    // Carve one puzzle per difficulty from the same solution
    let mut carver = Carver::new();
    for &difficulty in Difficulty::all_levels() {
        let puzzle = carver.carve(&solution, difficulty);
        println!(
            "{} puzzle ({} clues, {} open cells):",
            difficulty,
            puzzle.clue_count(),
            puzzle.empty_count()
        );
        println!("{}", puzzle);
    }

    // Start a session and burn a hint
    let mut game = Game::new(Difficulty::Easy);
    println!(
        "New {} game, {} clues",
        game.difficulty(),
        game.puzzle().clue_count()
    );

    let first_open = Position::all()
        .find(|&pos| !game.is_clue(pos))
        .expect("carved puzzle has open cells");
    if let Some(digit) = game.hint(first_open) {
        println!(
            "Hint revealed {} at row {}, column {} ({} hints left)",
            digit,
            first_open.row,
            first_open.col,
            game.hints_remaining()
        );
    }

    match game.status() {
        GameStatus::InProgress => println!("Game in progress at {}", game.elapsed_string()),
        GameStatus::Won => println!("Won in {}", game.elapsed_string()),
        GameStatus::Lost => println!("Lost after {}", game.elapsed_string()),
    }
}
