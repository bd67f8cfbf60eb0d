#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::{escape_time, Complex};

pub mod schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid of {width}x{height} needs {expected} cells, found {found}")]
    CellCount {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
}

/// Row-major buffer of escape-time counts.
/// Cells hold `0` until the grid has been filled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "RawEscapeGrid"))]
pub struct EscapeGrid {
    width: usize,
    height: usize,
    max_iter: u32,
    cells: Vec<u32>,
}

/// Unchecked wire form of [`EscapeGrid`].
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct RawEscapeGrid {
    width: usize,
    height: usize,
    max_iter: u32,
    cells: Vec<u32>,
}

#[cfg(feature = "serialize")]
impl TryFrom<RawEscapeGrid> for EscapeGrid {
    type Error = GridError;

    fn try_from(raw: RawEscapeGrid) -> Result<Self, Self::Error> {
        Self::from_cells(raw.width, raw.height, raw.max_iter, raw.cells)
    }
}

impl EscapeGrid {
    pub fn new(width: usize, height: usize, max_iter: u32) -> Self {
        Self {
            width,
            height,
            max_iter,
            cells: vec![0; width * height],
        }
    }

    /// Wrap existing row-major `cells`; their count must be `width * height`.
    pub fn from_cells(
        width: usize,
        height: usize,
        max_iter: u32,
        cells: Vec<u32>,
    ) -> Result<Self, GridError> {
        let expected = width.checked_mul(height).ok_or(GridError::CellCount {
            width,
            height,
            expected: usize::MAX,
            found: cells.len(),
        })?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                width,
                height,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            max_iter,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Exactly `height` rows, empty when the width is zero.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        (0..self.height).map(move |row| {
            let start = row * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Complex coordinate of the cell at (`row`, `col`).
    pub fn coordinate(&self, row: usize, col: usize) -> Complex {
        Complex::from_pixel(row, col, self.width, self.height)
    }

    /// Row whose coordinates are the complex conjugates of `row`'s.
    /// Only exists for even heights; row 0 sits on the top edge and has no partner.
    pub fn mirror_row(&self, row: usize) -> Option<usize> {
        if self.height % 2 != 0 || row == 0 || row >= self.height {
            return None;
        }
        Some(self.height - row)
    }

    /// Check that every row equals its mirror across the real axis.
    pub fn is_mirror_symmetric(&self) -> bool {
        (1..self.height).all(|row| match self.mirror_row(row) {
            Some(mirror) => self.row(row) == self.row(mirror),
            None => false,
        })
    }

    /// Whether every cell holds a count in `[1, max_iter]`.
    pub fn is_filled(&self) -> bool {
        let max_iter = self.max_iter.max(1);
        self.cells.iter().all(|&v| (1..=max_iter).contains(&v))
    }
}

/// Evaluate every pixel of row `row` into `cells`.
pub(crate) fn fill_row(cells: &mut [u32], row: usize, width: usize, height: usize, max_iter: u32) {
    for (col, cell) in cells.iter_mut().enumerate() {
        let c = Complex::from_pixel(row, col, width, height);
        *cell = escape_time(c, max_iter);
    }
}
