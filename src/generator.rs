use crate::grid::Grid;
use crate::rng::Rng;

/// Produces fully filled, rule-valid grids via randomized backtracking.
///
/// Every call to [`Generator::generate`] starts from an empty board and
/// yields an independent solution; two calls share no state beyond the
/// generator's random stream.
pub struct Generator {
    rng: Rng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Rng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Generate a complete valid grid.
    pub fn generate(&mut self) -> Grid {
        let mut grid = Grid::new();
        let mut placements = 0u64;
        let filled = self.fill_from(&mut grid, &mut placements);
        // Filling always succeeds: every partial grid reached from an empty
        // board extends to a full solution once failed branches are undone.
        debug_assert!(filled);
        log::debug!("filled grid after {} placements", placements);
        grid
    }

    // Walks cells in row-major order, trying digits in a fresh random order
    // at each empty cell. Returns false to request backtracking at the
    // parent placement.
    fn fill_from(&mut self, grid: &mut Grid, placements: &mut u64) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.rng.shuffle(&mut digits);

        for &digit in &digits {
            if grid.can_place(pos, digit) {
                grid.set(pos, digit);
                *placements += 1;
                if self.fill_from(grid, placements) {
                    return true;
                }
                grid.clear(pos);
            }
        }

        false
    }
}
