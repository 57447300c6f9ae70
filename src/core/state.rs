//! Game state - the arena, the active and preview pieces, and the
//! score/level/lines counters.
//!
//! `GameState` owns the arena exclusively. The engine installs and removes
//! pieces through explicit operations; nothing hands out mutable rows.

use crate::config::GameConfig;
use crate::core::{collides, Arena, Piece};
use crate::types::CellValue;

#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    active: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    rows_cleared_score: u32,
    level_score_threshold: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            arena: Arena::new(config.arena_width, config.arena_height),
            active: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            rows_cleared_score: config.rows_cleared_score,
            level_score_threshold: config.level_score_threshold,
        }
    }

    /// Back to the start-of-game state: empty arena, no pieces, counters at
    /// their initial values (score 0, level 1, lines 0).
    pub fn reset(&mut self) {
        self.arena = Arena::new(self.arena.width(), self.arena.height());
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Remove and return the active piece, leaving the slot empty.
    pub fn take_active(&mut self) -> Option<Piece> {
        self.active.take()
    }

    /// Install a piece as the active piece.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    /// Install the preview piece.
    pub fn set_next(&mut self, piece: Piece) {
        self.next = Some(piece);
    }

    /// Write a single arena cell. Used for scenario setup; gameplay mutation
    /// goes through `merge_active_piece` and `clear_row`.
    pub fn set_cell(&mut self, x: i32, y: i32, value: CellValue) -> bool {
        self.arena.set(x, y, value)
    }

    /// Remove arena row `y`, shifting rows above it down.
    pub fn clear_row(&mut self, y: usize) {
        self.arena.clear_row(y);
    }

    /// Apply a row-clear result to the counters. This is the single scoring
    /// path: score grows by `rows_cleared * rows_cleared_score`, lines by
    /// `rows_cleared`, and the level advances by at most one per call once the
    /// score reaches `level * level_score_threshold` (several threshold
    /// crossings in one clear still advance a single level).
    ///
    /// Returns whether the level advanced, so the engine can tighten gravity.
    pub fn update_score(&mut self, rows_cleared: u32) -> bool {
        self.score += rows_cleared * self.rows_cleared_score;
        self.lines += rows_cleared;

        if self.score >= self.level * self.level_score_threshold {
            self.level += 1;
            return true;
        }
        false
    }

    /// Copy every occupied cell of the active piece into the arena at the
    /// piece's position. No-op when there is no active piece. Overlapping an
    /// occupied cell is a caller bug, not something handled here; the piece is
    /// expected to rest in empty space at lock time.
    pub fn merge_active_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        for (x, y, value) in piece.matrix.occupied() {
            self.arena.set(piece.x + x as i32, piece.y + y as i32, value);
        }
        self.active = Some(piece);
    }

    /// Whether the active piece overlaps settled cells or the boundary.
    /// Always false without an active piece. Delegates to the shared
    /// collision predicate.
    pub fn is_game_over(&self) -> bool {
        self.active
            .as_ref()
            .map_or(false, |piece| collides(&self.arena, piece))
    }
}
