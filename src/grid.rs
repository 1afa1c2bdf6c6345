use thiserror::Error;

/// Errors raised when constructing a grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// A rectangular grid whose edges are connected, i.e. a torus.
///
/// Coordinates are signed and wrap modulo the grid dimensions on both axes,
/// so any `(row, col)` pair is valid. That is what lets neighbor scans run
/// `row - 1 ..= row + 1` without special-casing the edges.
#[derive(Clone, Debug)]
pub struct ToroidalGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> ToroidalGrid<T> {
    /// Create a grid with every cell set to `init`
    pub fn new(width: usize, height: usize, init: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![init; width * height],
        })
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> ToroidalGrid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index for a wrapped coordinate pair
    #[inline]
    fn index(&self, row: isize, col: isize) -> usize {
        let r = row.rem_euclid(self.height as isize) as usize;
        let c = col.rem_euclid(self.width as isize) as usize;
        r * self.width + c
    }

    /// Get the cell at position, wrapping both coordinates
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> &T {
        &self.cells[self.index(row, col)]
    }

    /// Set the cell at position, wrapping both coordinates
    #[inline]
    pub fn set(&mut self, row: isize, col: isize, value: T) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Iterate over `(row, col, &value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, value)| (i / self.width, i % self.width, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            ToroidalGrid::new(0, 5, 0u8).unwrap_err(),
            GridError::InvalidDimensions { width: 0, height: 5 }
        );
        assert_eq!(
            ToroidalGrid::new(5, 0, 0u8).unwrap_err(),
            GridError::InvalidDimensions { width: 5, height: 0 }
        );
    }

    #[test]
    fn get_set_roundtrip() {
        let mut grid = ToroidalGrid::new(4, 3, 0i32).unwrap();
        grid.set(1, 2, 7);
        assert_eq!(*grid.get(1, 2), 7);
        assert_eq!(*grid.get(0, 0), 0);
    }

    #[test]
    fn wraparound_invariance() {
        let mut grid = ToroidalGrid::new(5, 3, 0i32).unwrap();
        grid.set(2, 4, 42);
        for k in -3isize..=3 {
            assert_eq!(*grid.get(2 + k * 3, 4), 42, "row offset k={k}");
            assert_eq!(*grid.get(2, 4 + k * 5), 42, "col offset k={k}");
            assert_eq!(*grid.get(2 + k * 3, 4 + k * 5), 42, "both offsets k={k}");
        }
    }

    #[test]
    fn negative_coordinates_wrap() {
        let mut grid = ToroidalGrid::new(4, 4, false).unwrap();
        grid.set(-1, -1, true);
        assert!(*grid.get(3, 3));
        grid.set(0, 0, true);
        assert!(*grid.get(-4, 4));
    }

    #[test]
    fn iter_is_row_major() {
        let mut grid = ToroidalGrid::new(2, 2, 0usize).unwrap();
        let mut n = 0;
        for row in 0..2 {
            for col in 0..2 {
                grid.set(row, col, n);
                n += 1;
            }
        }
        let triples: Vec<_> = grid.iter().map(|(r, c, &v)| (r, c, v)).collect();
        assert_eq!(triples, vec![(0, 0, 0), (0, 1, 1), (1, 0, 2), (1, 1, 3)]);
    }
}
