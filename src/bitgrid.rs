//! A runtime-sized bit grid over a rows×columns board.
//!
//! Cells are packed row-major into `u64` words. Used for O(1) membership
//! tests on position sets (the mine set) instead of scanning a list.

use core::fmt;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Requested grid has a zero dimension.
    EmptyGrid { rows: usize, columns: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::EmptyGrid { rows, columns } => {
                write!(f, "EmptyGrid: rows={}, columns={}", rows, columns)
            }
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A rows×columns bit grid stored in a vector of `u64` words.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    columns: usize,
    words: Vec<u64>,
}

impl BitGrid {
    /// Create a new empty grid (all bits cleared).
    pub fn new(rows: usize, columns: usize) -> Result<Self, BitGridError> {
        if rows == 0 || columns == 0 {
            return Err(BitGridError::EmptyGrid { rows, columns });
        }
        let bits = rows * columns;
        Ok(BitGrid {
            rows,
            columns,
            words: vec![0; bits.div_ceil(64)],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let idx = self.index(row, col)?;
        Ok((self.words[idx / 64] >> (idx % 64)) & 1 != 0)
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.index(row, col)?;
        self.words[idx / 64] |= 1 << (idx % 64);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.index(row, col)?;
        self.words[idx / 64] &= !(1 << (idx % 64));
        Ok(())
    }

    /// Toggles the bit at (row, col).
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.index(row, col)?;
        self.words[idx / 64] ^= 1 << (idx % 64);
        Ok(())
    }

    /// Clears all bits to `0`.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Creates a grid from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(rows: usize, columns: usize, iter: I) -> Result<Self, BitGridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(rows, columns)?;
        for (r, c) in iter {
            grid.set(r, c)?;
        }
        Ok(grid)
    }

    /// Iterator over the set bits of the grid, in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_> {
        SetBits { grid: self, idx: 0 }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitGridError> {
        if row >= self.rows || col >= self.columns {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.columns + col)
        }
    }
}

impl fmt::Debug for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid {}x{}:", self.rows, self.columns)?;
        for r in 0..self.rows {
            for c in 0..self.columns {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bit grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a> {
    grid: &'a BitGrid,
    idx: usize,
}

impl<'a> Iterator for SetBits<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.grid.rows * self.grid.columns;
        while self.idx < total {
            let idx = self.idx;
            self.idx += 1;
            if (self.grid.words[idx / 64] >> (idx % 64)) & 1 != 0 {
                return Some((idx / self.grid.columns, idx % self.grid.columns));
            }
        }
        None
    }
}
