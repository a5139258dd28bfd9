use super::Grid;
use crate::GridError;
use std::fmt;

/// Deterministic starting patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Every cell is dead.
    Empty,
    /// 2x2 blocks separated by dead lines on every third column and row.
    StableSquares,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Empty, Preset::StableSquares];

    /// Overwrites every cell of `grid` with the pattern.
    pub fn apply(self, grid: &mut Grid) {
        match self {
            Self::Empty => grid.fill(false),
            Self::StableSquares => {
                let (width, height) = grid.size();
                for row in 0..height {
                    for col in 0..width {
                        let alive = !(col % 3 == 0 || row % 3 == 0);
                        grid.set(col as i64, row as i64, alive);
                    }
                }
            }
        }
    }

    /// Fresh grid of the given size filled with the pattern.
    pub fn seed(self, width: usize, height: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::new(width, height)?;
        self.apply(&mut grid);
        Ok(grid)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "Empty",
            Self::StableSquares => "Stable squares",
        };
        f.write_str(name)
    }
}

impl Grid {
    /// Fills the field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), GridError> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(GridError::InvalidFillRate(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let (width, height) = self.size();
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                self.set(x, y, rng.gen_bool(fill_rate));
            }
        }
        Ok(())
    }
}
