use crate::carver::{Carver, Difficulty};
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::grid::{Grid, Position, BOX_SIZE, SIZE};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Mistakes allowed before the game is lost.
pub const MAX_MISTAKES: usize = 3;
/// Hints available per game.
pub const MAX_HINTS: usize = 3;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Outcome of placing a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The digit matches the solution.
    Correct,
    /// The digit does not match the solution; a mistake was recorded.
    Mistake,
    /// The input was ignored: game over, paused, or a clue cell.
    Rejected,
}

/// Which of a cell's units are completely and correctly filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletedUnits {
    pub row: bool,
    pub col: bool,
    pub box_: bool,
}

/// A single play session: one puzzle, its solution, and all play state.
///
/// The session owns its solution/puzzle pair exclusively. Starting over
/// means constructing a fresh `Game`; neither grid is ever reused across
/// sessions.
#[derive(Debug, Clone)]
pub struct Game {
    /// Carved puzzle; its filled cells are the immutable clues.
    puzzle: Grid,
    /// Current board: clues plus player entries, right or wrong.
    board: Grid,
    /// Full solution used for answer checking.
    solution: Grid,
    difficulty: Difficulty,
    mistakes: usize,
    hints_used: usize,
    paused: bool,
    status: GameStatus,
    /// Start of the current unpaused stretch.
    start_time: Instant,
    /// Time accumulated before the current stretch.
    elapsed: Duration,
}

impl Game {
    /// Start a new game: generate a solution, carve a puzzle for
    /// `difficulty`, and begin the clock.
    pub fn new(difficulty: Difficulty) -> Self {
        let solution = Generator::new().generate();
        let puzzle = Carver::new().carve(&solution, difficulty);
        Self::assemble(solution, puzzle, difficulty)
    }

    /// Build a game from an existing solution/puzzle pair.
    ///
    /// Rejects pairs where a puzzle clue disagrees with the solution.
    pub fn from_parts(solution: Grid, puzzle: Grid, difficulty: Difficulty) -> Result<Self> {
        for pos in Position::all() {
            if let Some(digit) = puzzle.get(pos) {
                if solution.get(pos) != Some(digit) {
                    return Err(Error::InconsistentPuzzle {
                        row: pos.row,
                        col: pos.col,
                    });
                }
            }
        }
        Ok(Self::assemble(solution, puzzle, difficulty))
    }

    fn assemble(solution: Grid, puzzle: Grid, difficulty: Difficulty) -> Self {
        Self {
            board: puzzle.clone(),
            puzzle,
            solution,
            difficulty,
            mistakes: 0,
            hints_used: 0,
            paused: false,
            status: GameStatus::InProgress,
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// The current board, clues and player entries alike.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The carved puzzle as it looked at the start of the game.
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn hints_remaining(&self) -> usize {
        MAX_HINTS.saturating_sub(self.hints_used)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether `pos` holds one of the original clues.
    pub fn is_clue(&self, pos: Position) -> bool {
        self.puzzle.get(pos).is_some()
    }

    /// The player's entry at `pos`, if the cell is not a clue.
    pub fn entry(&self, pos: Position) -> Option<u8> {
        if self.is_clue(pos) {
            None
        } else {
            self.board.get(pos)
        }
    }

    /// Whether the entry at `pos` disagrees with the solution.
    pub fn is_wrong(&self, pos: Position) -> bool {
        match self.board.get(pos) {
            Some(digit) => self.solution.get(pos) != Some(digit),
            None => false,
        }
    }

    /// Place `digit` at `pos` and check it against the solution.
    ///
    /// Wrong digits stay on the board (the renderer marks them) and count
    /// toward the mistake limit; reaching the limit ends the game.
    pub fn place(&mut self, pos: Position, digit: u8) -> Placement {
        debug_assert!((1..=9).contains(&digit));
        if self.status != GameStatus::InProgress || self.paused || self.is_clue(pos) {
            return Placement::Rejected;
        }

        self.board.set(pos, digit);

        if self.solution.get(pos) == Some(digit) {
            self.check_win();
            Placement::Correct
        } else {
            self.mistakes += 1;
            if self.mistakes >= MAX_MISTAKES {
                self.finish(GameStatus::Lost);
            }
            Placement::Mistake
        }
    }

    /// Erase the player's entry at `pos`. Clues cannot be erased.
    pub fn erase(&mut self, pos: Position) -> bool {
        if self.status != GameStatus::InProgress || self.paused || self.is_clue(pos) {
            return false;
        }
        if self.board.get(pos).is_none() {
            return false;
        }
        self.board.clear(pos);
        true
    }

    /// Reveal the solution digit at `pos`, consuming one hint.
    ///
    /// Only empty cells and wrong entries can be hinted, and hints never
    /// count as mistakes. Returns the revealed digit.
    pub fn hint(&mut self, pos: Position) -> Option<u8> {
        if self.status != GameStatus::InProgress || self.paused || self.hints_used >= MAX_HINTS {
            return None;
        }
        if self.is_clue(pos) || (self.board.get(pos).is_some() && !self.is_wrong(pos)) {
            return None;
        }

        // The solution grid is complete, so the lookup cannot miss.
        let digit = self.solution.get(pos)?;
        self.board.set(pos, digit);
        self.hints_used += 1;
        self.check_win();
        Some(digit)
    }

    /// Which of the units through `pos` are completely and correctly filled.
    ///
    /// Renderers use this after a correct placement to flash the finished
    /// row, column, or box.
    pub fn completed_units(&self, pos: Position) -> CompletedUnits {
        let matches = |p: Position| self.board.get(p) == self.solution.get(p);

        let row = (0..SIZE).all(|col| matches(Position::new(pos.row, col)));
        let col = (0..SIZE).all(|row| matches(Position::new(row, pos.col)));

        let origin = pos.box_origin();
        let box_ = (origin.row..origin.row + BOX_SIZE).all(|row| {
            (origin.col..origin.col + BOX_SIZE).all(|col| matches(Position::new(row, col)))
        });

        CompletedUnits { row, col, box_ }
    }

    /// Toggle pause. Pausing freezes the clock and blocks all input.
    pub fn toggle_pause(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }

        if self.paused {
            self.start_time = Instant::now();
        } else {
            self.elapsed += self.start_time.elapsed();
        }
        self.paused = !self.paused;
    }

    /// Time spent playing, excluding paused stretches.
    pub fn elapsed(&self) -> Duration {
        if self.paused || self.status != GameStatus::InProgress {
            self.elapsed
        } else {
            self.elapsed + self.start_time.elapsed()
        }
    }

    /// The elapsed time formatted as MM:SS.
    pub fn elapsed_string(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    fn check_win(&mut self) {
        if self.board == self.solution {
            self.finish(GameStatus::Won);
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.elapsed += self.start_time.elapsed();
        self.status = status;
    }

    /// Serialize the session for saving.
    pub fn save(&self) -> Result<String> {
        let state = SaveState {
            puzzle: self.puzzle.to_string_compact(),
            board: self.board.to_string_compact(),
            solution: self.solution.to_string_compact(),
            difficulty: self.difficulty,
            elapsed_secs: self.elapsed().as_secs(),
            mistakes: self.mistakes,
            hints_used: self.hints_used,
        };
        Ok(serde_json::to_string(&state)?)
    }

    /// Restore a saved session. Restored games begin paused.
    pub fn restore(json: &str) -> Result<Self> {
        let state: SaveState = serde_json::from_str(json)?;

        let solution = Grid::from_string(&state.solution)?;
        let puzzle = Grid::from_string(&state.puzzle)?;
        let board = Grid::from_string(&state.board)?;

        let mut game = Self::from_parts(solution, puzzle, state.difficulty)?;
        game.board = board;
        game.mistakes = state.mistakes;
        game.hints_used = state.hints_used;
        game.elapsed = Duration::from_secs(state.elapsed_secs);
        game.paused = true;

        if game.board == game.solution {
            game.status = GameStatus::Won;
        } else if game.mistakes >= MAX_MISTAKES {
            game.status = GameStatus::Lost;
        }

        Ok(game)
    }
}

#[derive(Serialize, Deserialize)]
struct SaveState {
    puzzle: String,
    board: String,
    solution: String,
    difficulty: Difficulty,
    elapsed_secs: u64,
    mistakes: usize,
    hints_used: usize,
}
