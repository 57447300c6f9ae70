//! Shape matrix - a rectangular grid of cell values with 90° rotation.
//!
//! Uses flat row-major storage. Rotation is implemented once here and shared
//! by `Piece::rotate` and the engine so the two can never drift apart.

use crate::types::{CellValue, RotateDir};

/// A rectangular grid of cell values (0 = empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<CellValue>,
}

impl Matrix {
    /// Create an all-zero matrix.
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// Panics if the rows are not all the same length. This is only called on
    /// static catalogue data and in tests, where a malformed shape is a bug.
    pub fn from_rows(rows: &[&[CellValue]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == width),
            "shape matrix rows must all have the same length"
        );

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at (x, y). Panics if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> CellValue {
        assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Iterate over the occupied (non-zero) cells as (x, y, value).
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, CellValue)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(i, &v)| (i % self.width, i / self.width, v))
    }

    /// Whether the matrix contains at least one occupied cell.
    pub fn has_occupied(&self) -> bool {
        self.cells.iter().any(|&v| v != 0)
    }

    /// Return a new matrix rotated 90° in the given direction.
    ///
    /// Handles rectangular matrices generally (width and height swap); for the
    /// square catalogue shapes this is equivalent to transposing and then
    /// reversing rows (clockwise) or row order (counterclockwise).
    pub fn rotated(&self, dir: RotateDir) -> Self {
        let mut out = Self::zeroed(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.cells[y * self.width + x];
                let (ox, oy) = match dir {
                    RotateDir::Clockwise => (self.height - 1 - y, x),
                    RotateDir::CounterClockwise => (y, self.width - 1 - x),
                };
                out.cells[oy * out.width + ox] = v;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Matrix {
        Matrix::from_rows(&[&[0, 0, 3], &[3, 3, 3], &[0, 0, 0]])
    }

    #[test]
    fn rotate_clockwise_square() {
        let m = l_shape();
        let r = m.rotated(RotateDir::Clockwise);
        assert_eq!(
            r,
            Matrix::from_rows(&[&[0, 3, 0], &[0, 3, 0], &[0, 3, 3]])
        );
    }

    #[test]
    fn rotate_counterclockwise_square() {
        let m = l_shape();
        let r = m.rotated(RotateDir::CounterClockwise);
        assert_eq!(
            r,
            Matrix::from_rows(&[&[3, 3, 0], &[0, 3, 0], &[0, 3, 0]])
        );
    }

    #[test]
    fn rotate_four_times_is_identity() {
        let m = l_shape();

        let mut cw = m.clone();
        let mut ccw = m.clone();
        for _ in 0..4 {
            cw = cw.rotated(RotateDir::Clockwise);
            ccw = ccw.rotated(RotateDir::CounterClockwise);
        }
        assert_eq!(cw, m);
        assert_eq!(ccw, m);
    }

    #[test]
    fn rotate_opposite_directions_cancel() {
        let m = l_shape();
        let back = m
            .rotated(RotateDir::Clockwise)
            .rotated(RotateDir::CounterClockwise);
        assert_eq!(back, m);
    }

    #[test]
    fn rotate_rectangular_swaps_dimensions() {
        let m = Matrix::from_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        let r = m.rotated(RotateDir::Clockwise);

        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 3);
        assert_eq!(r, Matrix::from_rows(&[&[4, 1], &[5, 2], &[6, 3]]));

        // Four quarter turns bring a rectangle back as well.
        let mut round = m.clone();
        for _ in 0..4 {
            round = round.rotated(RotateDir::Clockwise);
        }
        assert_eq!(round, m);
    }

    #[test]
    fn rotate_leaves_input_unmodified() {
        let m = l_shape();
        let copy = m.clone();
        let _ = m.rotated(RotateDir::Clockwise);
        assert_eq!(m, copy);
    }

    #[test]
    fn occupied_iterates_nonzero_cells_only() {
        let m = l_shape();
        let cells: Vec<_> = m.occupied().collect();
        assert_eq!(cells, vec![(2, 0, 3), (0, 1, 3), (1, 1, 3), (2, 1, 3)]);
        assert_eq!(m.get(2, 0), 3);
        assert_eq!(m.get(0, 0), 0);
    }
}
