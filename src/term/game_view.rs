//! GameView - pure composition of game state into a grid of cell values.
//!
//! No I/O here: the renderer takes the composed grid and draws it. Keeping
//! this step pure makes it unit-testable.

use crate::core::{GameState, Piece};
use crate::types::CellValue;

/// Overlay the active piece onto a copy of the arena, producing one
/// height x width grid of cell values ready for drawing. Piece cells hanging
/// above the top edge are clipped.
pub fn compose_frame(state: &GameState) -> Vec<Vec<CellValue>> {
    let arena = state.arena();
    let mut grid: Vec<Vec<CellValue>> = (0..arena.height())
        .map(|y| arena.row(y).to_vec())
        .collect();

    if let Some(piece) = state.active() {
        overlay(&mut grid, piece);
    }
    grid
}

/// Render the preview piece into a grid of its matrix dimensions, or an empty
/// grid when no preview is queued.
pub fn compose_preview(state: &GameState) -> Vec<Vec<CellValue>> {
    let Some(piece) = state.next() else {
        return Vec::new();
    };

    let mut grid = vec![vec![0; piece.matrix.width()]; piece.matrix.height()];
    for (x, y, value) in piece.matrix.occupied() {
        grid[y][x] = value;
    }
    grid
}

fn overlay(grid: &mut [Vec<CellValue>], piece: &Piece) {
    let height = grid.len() as i32;
    let width = grid.first().map_or(0, |row| row.len()) as i32;

    for (x, y, value) in piece.matrix.occupied() {
        let ax = piece.x + x as i32;
        let ay = piece.y + y as i32;
        if ax >= 0 && ax < width && ay >= 0 && ay < height {
            grid[ay as usize][ax as usize] = value;
        }
    }
}
