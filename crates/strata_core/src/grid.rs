//! # Row-Major Grid
//!
//! A rectangular field of cells stored as one contiguous buffer.
//!
//! ## Layout
//!
//! Cell `(x, y)` lives at `y * width + x`. Rows are contiguous, so a row is
//! a plain slice and whole-grid passes are a single linear walk.

use std::ops::{Index, IndexMut};

use crate::error::{GridError, GridResult};

/// A rectangular grid of cells in row-major order.
///
/// The shape is fixed at construction. A grid can never be ragged: the
/// row-of-rows constructor rejects mismatched rows before any cell is copied.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Wraps a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if `cells.len() != width * height`.
    /// A product that overflows `usize` is reported with `expected == usize::MAX`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> GridResult<Self> {
        let expected = width.checked_mul(height);
        if expected != Some(cells.len()) {
            return Err(GridError::LengthMismatch {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from nested rows.
    ///
    /// An empty outer vector produces a `0x0` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotRectangular`] if any row differs in length
    /// from the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::NotRectangular {
                row,
                expected: width,
                found,
            });
        }

        let mut cells = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for row in rows {
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid by evaluating `f(x, y)` at every cell, row by row.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `width * height` overflows `usize`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid holds no cells (either dimension is zero).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Mutable access to the cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < self.width && y < self.height {
            self.cells.get_mut(y * self.width + x)
        } else {
            None
        }
    }

    /// The backing buffer in row-major order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable backing buffer in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consumes the grid and returns its backing buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Iterates over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on zero; a zero-width grid has no cells anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Iterates over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates over `(x, y, &cell)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, cell))
    }

    /// Applies `f` cell-wise, producing a new grid with the same shape.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Fails with [`GridError::Empty`] if the grid has no cells.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn ensure_non_empty(&self) -> GridResult<()> {
        if self.is_empty() {
            Err(GridError::Empty)
        } else {
            Ok(())
        }
    }

    /// Fails unless `other` has exactly this grid's dimensions.
    ///
    /// `name` identifies `other` in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] on any difference.
    pub fn ensure_same_dimensions<U>(&self, other: &Grid<U>, name: &'static str) -> GridResult<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(GridError::DimensionMismatch {
                name,
                expected_width: self.width,
                expected_height: self.height,
                found_width: other.width,
                found_height: other.height,
            })
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `width * height` overflows `usize`.
    #[must_use]
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width.saturating_mul(height)],
        }
    }

    /// Copies the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.height)
            .map(|y| self.cells[y * self.width..(y + 1) * self.width].to_vec())
            .collect()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// Indexes by `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        &mut self.cells[y * self.width + x]
    }
}
