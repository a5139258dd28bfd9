use crate::GridError;

/// Offsets of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Rectangular field of cells with opposite edges stitched together.
///
/// Cells are stored row-major, the cell `(x, y)` lives at `x + y * width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a field of dead cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        let size = width
            .checked_mul(height)
            .filter(|_| i64::try_from(width).is_ok() && i64::try_from(height).is_ok())
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            cells: vec![false; size],
            width,
            height,
        })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Maps any coordinate pair onto the torus and returns the linear index of the cell.
    ///
    /// The result is always in `0..width * height`.
    pub fn cell_index(&self, x: i64, y: i64) -> usize {
        // dimensions fit into i64, checked in `new`
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        x + y * self.width
    }

    pub fn get(&self, x: i64, y: i64) -> bool {
        self.cells[self.cell_index(x, y)]
    }

    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.cell_index(x, y);
        self.cells[idx] = alive;
    }

    pub fn fill(&mut self, alive: bool) {
        self.cells.fill(alive);
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> usize {
        // canonical coordinates, so that adding an offset cannot overflow
        let idx = self.cell_index(x, y);
        let (x, y) = ((idx % self.width) as i64, (idx / self.width) as i64);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.get(x + dx, y + dy))
            .count()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
