//! Piece - a shape matrix plus a position in arena coordinates.

use crate::core::Matrix;
use crate::types::RotateDir;

/// A movable piece instance. (x, y) is the matrix's top-left offset into the
/// arena; it may be negative while part of the shape hangs above the top edge.
///
/// Pieces are value-like: `Clone` produces an independent deep copy sharing no
/// storage with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub matrix: Matrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(matrix: Matrix, x: i32, y: i32) -> Self {
        Self { matrix, x, y }
    }

    /// Rotate the shape matrix in place. The position is left untouched;
    /// wall-kick correction is the engine's responsibility.
    pub fn rotate(&mut self, dir: RotateDir) {
        self.matrix = self.matrix.rotated(dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_replaces_matrix_and_keeps_position() {
        let mut piece = Piece::new(Matrix::from_rows(&[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]]), 4, 2);
        piece.rotate(RotateDir::Clockwise);

        assert_eq!(
            piece.matrix,
            Matrix::from_rows(&[&[0, 6, 0], &[0, 6, 6], &[0, 6, 0]])
        );
        assert_eq!((piece.x, piece.y), (4, 2));
    }

    #[test]
    fn clone_is_independent() {
        let original = Piece::new(Matrix::from_rows(&[&[4, 4], &[4, 4]]), 1, 1);
        let mut copy = original.clone();

        copy.x += 3;
        copy.rotate(RotateDir::Clockwise);

        assert_eq!(original.x, 1);
        assert_eq!(original.matrix, Matrix::from_rows(&[&[4, 4], &[4, 4]]));
    }
}
