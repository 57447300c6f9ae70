//! Arena - the fixed-size grid holding locked piece cells.
//!
//! Uses a flat row-major array. Coordinates: (x, y) with x left to right and
//! y top to bottom. The arena is exclusively owned by `GameState`; collaborators
//! get read accessors and explicit mutation operations, never raw rows.

use crate::types::CellValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: usize,
    height: usize,
    cells: Vec<CellValue>,
}

impl Arena {
    /// Create a new all-zero arena.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at (x, y), or `None` if the coordinates fall outside the
    /// arena. Signed coordinates so callers can probe piece-relative positions.
    pub fn get(&self, x: i32, y: i32) -> Option<CellValue> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: CellValue) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.cells[y as usize * self.width + x as usize] = value;
        true
    }

    /// Whether every cell of row `y` is occupied.
    pub fn row_is_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].iter().all(|&v| v != 0)
    }

    /// Whether the arena contains no occupied cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    /// Remove row `y`, shifting every row above it down by one and inserting
    /// an all-zero row at the top.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }

        for row in (1..=y).rev() {
            let src = (row - 1) * self.width;
            let dst = row * self.width;
            self.cells.copy_within(src..src + self.width, dst);
        }
        self.cells[..self.width].fill(0);
    }

    /// Read-only view of row `y`, for rendering.
    pub fn row(&self, y: usize) -> &[CellValue] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Reset every cell to empty.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }
}
