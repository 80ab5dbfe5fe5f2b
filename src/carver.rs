use crate::error::{Error, Result};
use crate::grid::{Grid, Position, CELL_COUNT, SIZE};
use crate::rng::Rng;
use serde::{Deserialize, Serialize};

/// Difficulty level of a carved puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of clues left on the board after carving.
    pub fn clue_target(&self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 28,
            Difficulty::Hard => 22,
        }
    }

    /// All difficulty levels, easiest first.
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Carving configuration with an explicit clue target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveConfig {
    /// Number of filled cells to leave on the board.
    pub clues: usize,
}

impl CarveConfig {
    pub fn new(clues: usize) -> Self {
        Self { clues }
    }

    /// The standard clue target for a difficulty level.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            clues: difficulty.clue_target(),
        }
    }
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

/// Removes cells from a solved grid until a clue target remains.
///
/// The carved puzzle stays consistent with the solution it came from: every
/// surviving clue equals the corresponding solution cell. No uniqueness
/// check is performed, so aggressive targets may admit other completions.
pub struct Carver {
    rng: Rng,
}

impl Default for Carver {
    fn default() -> Self {
        Self::new()
    }
}

impl Carver {
    /// Create a carver seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Rng::from_entropy(),
        }
    }

    /// Create a carver with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Carve a puzzle for `difficulty` out of `solution`.
    ///
    /// The solution is copied, never mutated; built-in difficulty targets
    /// always fit the board, so this cannot fail.
    pub fn carve(&mut self, solution: &Grid, difficulty: Difficulty) -> Grid {
        self.carve_to(solution, difficulty.clue_target())
    }

    /// Carve with an explicit clue target.
    ///
    /// Targets beyond the 81-cell capacity are rejected before any work.
    pub fn carve_with_config(&mut self, solution: &Grid, config: CarveConfig) -> Result<Grid> {
        if config.clues > CELL_COUNT {
            return Err(Error::ClueTargetTooLarge {
                requested: config.clues,
                capacity: CELL_COUNT,
            });
        }
        Ok(self.carve_to(solution, config.clues))
    }

    // Clears uniformly random cells until `target` clues remain. Picks that
    // land on an already-empty cell are simply retried; the filled set
    // shrinks monotonically, so the loop terminates.
    fn carve_to(&mut self, solution: &Grid, target: usize) -> Grid {
        let mut puzzle = solution.clone();
        let mut revealed = puzzle.clue_count();

        while revealed > target {
            let pos = Position::new(self.rng.next_below(SIZE), self.rng.next_below(SIZE));
            if puzzle.get(pos).is_some() {
                puzzle.clear(pos);
                revealed -= 1;
            }
        }

        log::debug!("carved puzzle down to {} clues", revealed);
        puzzle
    }
}
