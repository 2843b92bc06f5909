//! Dense square matrix storage.

/// Row-major `n x n` matrix sized at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Create an `size x size` matrix with every cell set to `fill`.
    pub fn filled(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cell at (row, col). Panics when out of range, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty cell vector yields no chunks anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Mutable rows, for row-wise relaxation.
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, T> {
        self.cells.chunks_mut(self.size.max(1))
    }

    /// Mutable rows for rayon, same order as [`Self::rows_mut`].
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, T>
    where
        T: Send,
    {
        use rayon::slice::ParallelSliceMut;
        self.cells.par_chunks_mut(self.size.max(1))
    }
}

impl<T: Copy + PartialEq> SquareMatrix<T> {
    /// True when `m[i][j] == m[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
