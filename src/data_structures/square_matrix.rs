use std::ops::{Index, IndexMut};
use std::slice::{ChunksExact, ChunksExactMut};

/// Dense `n × n` matrix stored row-major in a single allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    /// Number of rows (and columns)
    size: usize,

    /// Cells, row after row
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates a matrix with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self {
        SquareMatrix {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Builds a matrix by calling `cell(row, col)` for every position
    pub fn from_fn<F>(size: usize, mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(cell(row, col));
            }
        }
        SquareMatrix { size, cells }
    }

    /// Returns the number of rows
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`, or None when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns one row as a slice
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterates over the rows in order
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.cells.chunks_exact(self.size.max(1))
    }

    pub(crate) fn rows_mut(&mut self) -> ChunksExactMut<'_, T> {
        self.cells.chunks_exact_mut(self.size.max(1))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.size, "column {} out of range", col);
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.size, "column {} out of range", col);
        &mut self.cells[row * self.size + col]
    }
}
