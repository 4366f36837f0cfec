use crate::error::GridError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sentinel cost for cells the search has not discovered yet.
pub const INFINITE_COST: u32 = 0xffff_ffff;

/// Static cell topology, fixed after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Free,
    Blocked,
}

/// One grid position with its search annotations.
///
/// `kind` never changes after generation; the remaining fields are
/// written only by the search engine while it runs. `predecessor` is a
/// coordinate, not a reference, so path reconstruction needs no
/// ownership edges between cells.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub kind: CellKind,
    /// Best known path cost from the start cell, `INFINITE_COST` until discovered.
    pub cost: u32,
    /// `cost + heuristic`; orders the open set. Meaningless until first relaxed.
    pub score: f64,
    /// True once the cell has been expanded (closed set membership).
    pub examined: bool,
    /// Neighbor that produced the current best cost.
    pub predecessor: Option<(i32, i32)>,
}

impl Cell {
    fn new(kind: CellKind) -> Self {
        Cell {
            kind,
            cost: INFINITE_COST,
            score: 0.0,
            examined: false,
            predecessor: None,
        }
    }
}

/// Fixed-size grid of cells shared between the search engine and the renderer.
#[derive(Debug, Clone)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    pub start: (i32, i32),
    pub end: (i32, i32),
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Generate a grid with random obstacles.
    ///
    /// Every cell other than `start` and `end` becomes Blocked
    /// independently with probability `obstacle_probability`. The same
    /// seed and parameters always produce the same layout.
    ///
    /// Validates the configuration up front: dimensions must be
    /// positive, `start` and `end` must be in bounds and the
    /// probability within `[0, 1]`.
    pub fn generate(
        cols: i32,
        rows: i32,
        start: (i32, i32),
        end: (i32, i32),
        obstacle_probability: f64,
        seed: u64,
    ) -> Result<Self, GridError> {
        if cols <= 0 || rows <= 0 {
            return Err(GridError::EmptyGrid { cols, rows });
        }
        if !(0.0..=1.0).contains(&obstacle_probability) {
            return Err(GridError::BadProbability(obstacle_probability));
        }
        for (x, y) in [start, end] {
            if x < 0 || x >= cols || y < 0 || y >= rows {
                return Err(GridError::OutOfBounds { x, y, cols, rows });
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = Vec::with_capacity((cols * rows) as usize);
        for y in 0..rows {
            for x in 0..cols {
                let blocked = rng.gen::<f64>() < obstacle_probability
                    && (x, y) != start
                    && (x, y) != end;
                cells.push(Cell::new(if blocked {
                    CellKind::Blocked
                } else {
                    CellKind::Free
                }));
            }
        }

        Ok(Grid {
            cols,
            rows,
            start,
            end,
            cells,
        })
    }

    /// Create an obstacle-free grid. Start and end must be in bounds.
    pub fn open(
        cols: i32,
        rows: i32,
        start: (i32, i32),
        end: (i32, i32),
    ) -> Result<Self, GridError> {
        Self::generate(cols, rows, start, end, 0.0, 0)
    }

    /// Convert (x, y) coordinates to a row-major cell index.
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.cols
    }

    /// Convert a cell index back to (x, y) coordinates.
    pub fn get_coords(&self, id: i32) -> (i32, i32) {
        (id % self.cols, id / self.cols)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    /// Look up the cell at (x, y), failing on out-of-bounds coordinates.
    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(&self.cells[self.get_id(x, y) as usize])
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        let id = self.get_id(x, y) as usize;
        Ok(&mut self.cells[id])
    }

    /// True iff (x, y) is in bounds and Free.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.get_id(x, y) as usize].kind == CellKind::Free
    }

    /// Orthogonal in-bounds Free neighbors of (x, y). No diagonals.
    pub fn neighbors(&self, x: i32, y: i32) -> Vec<(i32, i32)> {
        let mut result = Vec::with_capacity(4);
        for (dx, dy) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
            let (nx, ny) = (x + dx, y + dy);
            if self.is_walkable(nx, ny) {
                result.push((nx, ny));
            }
        }
        result
    }

    /// Render the grid as text art (blocked ■, examined o, free □,
    /// start s, end e), one row per line.
    pub fn to_text_art(&self) -> String {
        let mut result = String::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                let cell = &self.cells[self.get_id(x, y) as usize];
                let symbol = if (x, y) == self.start {
                    's'
                } else if (x, y) == self.end {
                    'e'
                } else if cell.kind == CellKind::Blocked {
                    '■'
                } else if cell.examined {
                    'o'
                } else {
                    '□'
                };
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let a = Grid::generate(30, 30, (0, 20), (20, 5), 0.3, 42).unwrap();
        let b = Grid::generate(30, 30, (0, 20), (20, 5), 0.3, 42).unwrap();
        for id in 0..(30 * 30) as usize {
            assert_eq!(a.cells[id].kind, b.cells[id].kind);
        }
    }

    #[test]
    fn start_and_end_are_never_blocked() {
        let grid = Grid::generate(10, 10, (1, 1), (8, 8), 1.0, 7).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let expect_free = (x, y) == (1, 1) || (x, y) == (8, 8);
                assert_eq!(grid.is_walkable(x, y), expect_free);
            }
        }
    }

    #[test]
    fn zero_probability_leaves_all_cells_free() {
        let grid = Grid::open(8, 6, (0, 0), (7, 5)).unwrap();
        assert!(grid.cells.iter().all(|c| c.kind == CellKind::Free));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(
            Grid::generate(0, 10, (0, 0), (0, 0), 0.3, 1).unwrap_err(),
            GridError::EmptyGrid { cols: 0, rows: 10 }
        );
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let err = Grid::generate(5, 5, (0, 0), (5, 2), 0.3, 1).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { x: 5, y: 2, .. }));
    }

    #[test]
    fn rejects_bad_probability() {
        assert_eq!(
            Grid::generate(5, 5, (0, 0), (4, 4), 1.5, 1).unwrap_err(),
            GridError::BadProbability(1.5)
        );
    }

    #[test]
    fn cell_lookup_fails_out_of_bounds() {
        let grid = Grid::open(5, 5, (0, 0), (4, 4)).unwrap();
        assert!(grid.cell(2, 2).is_ok());
        assert!(grid.cell(-1, 0).is_err());
        assert!(grid.cell(0, 5).is_err());
    }

    #[test]
    fn neighbors_respect_bounds_and_blocks() {
        let mut grid = Grid::open(3, 3, (0, 0), (2, 2)).unwrap();
        grid.cell_mut(1, 0).unwrap().kind = CellKind::Blocked;
        // corner cell: right neighbor blocked, only down remains
        assert_eq!(grid.neighbors(0, 0), vec![(0, 1)]);
        // center keeps the three unblocked sides
        assert_eq!(grid.neighbors(1, 1), vec![(0, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn text_art_marks_endpoints() {
        let grid = Grid::open(3, 1, (0, 0), (2, 0)).unwrap();
        assert_eq!(grid.to_text_art(), "s□e\n");
    }
}
