//! Collision detection - a pure predicate over an arena and a piece.
//!
//! Shared by piece movement, rotation, and the game-over check so the
//! implementations cannot drift apart.

use crate::core::{Arena, Piece};

/// Does the piece, at its current position and orientation, overlap the arena
/// boundary or an occupied cell?
///
/// Rows above the arena top never collide: a freshly rotated piece may hang
/// over the top edge. For every other occupied matrix cell, falling outside
/// the arena (either side or below the bottom) or onto a non-zero arena cell
/// counts as a collision. Empty matrix cells never collide.
///
/// Read-only and side-effect free.
pub fn collides(arena: &Arena, piece: &Piece) -> bool {
    for (x, y, _) in piece.matrix.occupied() {
        let ax = piece.x + x as i32;
        let ay = piece.y + y as i32;

        if ay < 0 {
            continue;
        }
        match arena.get(ax, ay) {
            Some(0) => {}
            _ => return true,
        }
    }
    false
}
