use std::sync::Once;
use sudoku_engine::{
    create_puzzle, generate_solution, CarveConfig, Carver, Difficulty, Error, Generator, Position,
};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn assert_consistent(puzzle: &sudoku_engine::Grid, solution: &sudoku_engine::Grid) {
    for pos in Position::all() {
        if let Some(digit) = puzzle.get(pos) {
            assert_eq!(
                Some(digit),
                solution.get(pos),
                "clue at row {}, column {} disagrees with the solution",
                pos.row,
                pos.col
            );
        }
    }
}

#[test]
fn generated_solution_is_valid_everywhere() {
    init_logging();

    let solution = generate_solution();

    assert!(solution.is_complete());
    let validation = solution.validate();
    assert!(validation.is_valid, "conflicts: {:?}", validation.conflicts);
}

#[test]
fn medium_carve_keeps_28_consistent_clues() {
    init_logging();

    let solution = generate_solution();
    let puzzle = create_puzzle(&solution, Difficulty::Medium);

    assert_eq!(puzzle.clue_count(), 28);
    assert_consistent(&puzzle, &solution);
}

#[test]
fn hard_then_easy_carves_share_one_unmutated_solution() {
    init_logging();

    let solution = generate_solution();
    let snapshot = solution.clone();

    let hard = create_puzzle(&solution, Difficulty::Hard);
    let easy = create_puzzle(&solution, Difficulty::Easy);

    assert_eq!(hard.clue_count(), 22);
    assert_eq!(easy.clue_count(), 35);
    assert_consistent(&hard, &solution);
    assert_consistent(&easy, &solution);
    assert_eq!(solution, snapshot);
}

#[test]
fn oversized_clue_target_raises_configuration_error() {
    init_logging();

    let solution = generate_solution();
    let mut carver = Carver::new();

    match carver.carve_with_config(&solution, CarveConfig::new(90)) {
        Err(Error::ClueTargetTooLarge {
            requested,
            capacity,
        }) => {
            assert_eq!(requested, 90);
            assert_eq!(capacity, 81);
        }
        other => panic!("expected a clue target error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn independent_generations_differ_over_trials() {
    init_logging();

    // Randomized trial order makes grid collisions vanishingly unlikely, but
    // a single pair could still collide; a handful of trials keeps the test
    // honest without flaking.
    let first = generate_solution();
    let varied = (0..5).any(|_| generate_solution() != first);
    assert!(varied, "five independent generations all matched");
}

#[test]
fn seeded_pipeline_is_reproducible() {
    init_logging();

    let carve = |seed: u64| {
        let solution = Generator::with_seed(seed).generate();
        Carver::with_seed(seed).carve(&solution, Difficulty::Hard)
    };

    assert_eq!(carve(11), carve(11));
    assert_ne!(carve(11), carve(12));
}
