use super::Grid;

/// Writes the next generation of `current` into `next` (rule B3/S23).
///
/// Only `current` is read, so every cell sees the neighbors of the same generation.
pub fn step(current: &Grid, next: &mut Grid) {
    assert_eq!(current.size(), next.size());
    let (width, height) = current.size();
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let neibs = current.count_live_neighbors(x, y);
            let alive = if current.get(x, y) {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
            next.set(x, y, alive);
        }
    }
}

impl Grid {
    pub fn next_generation(&self) -> Grid {
        let mut next = self.clone();
        step(self, &mut next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_cells(width: usize, height: usize, cells: &[(i64, i64)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in cells {
            grid.set(x, y, true);
        }
        grid
    }

    #[test]
    fn lonely_cell_dies() {
        let grid = with_cells(64, 64, &[(20, 20)]);
        let next = grid.next_generation();
        assert!(!next.get(20, 20));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let block = [(10, 10), (11, 10), (10, 11), (11, 11)];
        let grid = with_cells(64, 64, &block);
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn block_is_still_across_the_seam() {
        let block = [(-1, -1), (0, -1), (-1, 0), (0, 0)];
        let grid = with_cells(64, 64, &block);
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = with_cells(16, 16, &[(4, 5), (5, 5), (6, 5)]);
        let vertical = with_cells(16, 16, &[(5, 4), (5, 5), (5, 6)]);
        assert_eq!(horizontal.next_generation(), vertical);
        assert_eq!(vertical.next_generation(), horizontal);
    }

    #[test]
    fn birth_on_three_neighbors() {
        let grid = with_cells(8, 8, &[(0, 0), (2, 0), (1, 2)]);
        let next = grid.next_generation();
        assert!(next.get(1, 1));
    }

    #[test]
    fn overcrowded_cell_dies() {
        let grid = with_cells(8, 8, &[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
        assert_eq!(grid.count_live_neighbors(1, 1), 4);
        assert!(!grid.next_generation().get(1, 1));
    }

    #[test]
    fn glider_travels_around_torus() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let start = with_cells(64, 64, &glider);
        let mut curr = start.clone();
        let mut next = start.clone();
        // a glider moves one cell diagonally every 4 generations
        for _ in 0..4 * 64 {
            step(&curr, &mut next);
            std::mem::swap(&mut curr, &mut next);
            assert_eq!(curr.population(), 5);
        }
        assert_eq!(curr, start);
    }

    #[test]
    #[should_panic]
    fn mismatched_shapes_panic() {
        let curr = Grid::new(4, 4).unwrap();
        let mut next = Grid::new(4, 5).unwrap();
        step(&curr, &mut next);
    }
}
