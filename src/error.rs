/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A carve configuration asked for more clues than the board holds.
    #[error("requested clue count {requested} exceeds grid capacity {capacity}")]
    ClueTargetTooLarge { requested: usize, capacity: usize },

    /// A grid string had the wrong number of cells.
    #[error("grid string must contain {expected} cells, found {found}")]
    GridLength { expected: usize, found: usize },

    /// A grid string contained something other than a digit or `.`.
    #[error("invalid cell character {found:?} at index {index}")]
    GridCharacter { index: usize, found: char },

    /// A puzzle clue disagrees with the solution it was carved from.
    #[error("puzzle clue at row {row}, column {col} disagrees with the solution")]
    InconsistentPuzzle { row: usize, col: usize },

    /// A saved game could not be encoded or decoded.
    #[error("malformed save state: {0}")]
    SaveState(#[from] serde_json::Error),
}
