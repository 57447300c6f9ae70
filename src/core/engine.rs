//! Game engine: the spawn/fall/lock/clear/respawn state machine, gravity
//! timing, the wall-kick search, and the level-driven speed curve.
//!
//! The engine is host-driven: a front end calls `tick` with elapsed time and
//! feeds it `GameAction`s, then reads `state()` back for rendering. It never
//! schedules frames itself.

use anyhow::Result;

use crate::config::GameConfig;
use crate::core::{collides, GameState, Piece, SimpleRng};
use crate::types::{GameAction, RotateDir};

/// Engine lifecycle phase. `GameOver` is terminal: a finished engine is
/// replaced, not resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not started; no piece has spawned yet.
    Idle,
    /// A piece is falling under gravity and player control.
    Falling,
    /// Spawn position was blocked; the game has ended.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    state: GameState,
    rng: SimpleRng,
    /// Catalogue index of the piece queued for the next spawn.
    standby: usize,
    phase: Phase,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
}

impl Engine {
    /// Build an engine over a validated configuration. The seed makes piece
    /// selection reproducible.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        config.validate()?;

        let state = GameState::new(&config);
        let mut rng = SimpleRng::new(seed);
        let standby = rng.next_range(config.pieces.len() as u32) as usize;
        let drop_interval_ms = config.initial_drop_ms;

        Ok(Self {
            config,
            state,
            rng,
            standby,
            phase: Phase::Idle,
            drop_counter_ms: 0,
            drop_interval_ms,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the underlying state, for scenario setup.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Current gravity interval in milliseconds.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Spawn the first piece and begin falling. No-op once started.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.spawn_piece();
    }

    /// Advance timers by `elapsed_ms`. Once the accumulated time exceeds the
    /// drop interval, gravity pulls the active piece down one row.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Falling {
            return;
        }

        self.drop_counter_ms += elapsed_ms;
        if self.drop_counter_ms > self.drop_interval_ms {
            self.drop_piece();
        }
    }

    /// Dispatch a player command.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => {
                self.drop_piece();
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate_piece(RotateDir::Clockwise),
            GameAction::RotateCcw => self.rotate_piece(RotateDir::CounterClockwise),
        }
    }

    /// Shift the active piece horizontally, reverting on collision. There are
    /// no partial moves. No-op without an active piece or after game over.
    pub fn move_piece(&mut self, offset: i32) {
        if self.phase != Phase::Falling {
            return;
        }
        let Some(mut piece) = self.state.take_active() else {
            return;
        };

        piece.x += offset;
        if collides(self.state.arena(), &piece) {
            piece.x -= offset;
        }
        self.state.set_active(piece);
    }

    /// Advance the active piece one row. If the new position collides, the
    /// move is reverted and the piece locks: merge into the arena, clear
    /// completed rows, spawn the next piece. The drop counter resets either
    /// way, which also governs manual soft-drop timing.
    ///
    /// Returns whether a lock occurred.
    pub fn drop_piece(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(mut piece) = self.state.take_active() else {
            return false;
        };

        piece.y += 1;
        let locked = collides(self.state.arena(), &piece);
        if locked {
            piece.y -= 1;
            self.state.set_active(piece);
            self.state.merge_active_piece();
            self.clear_rows();
            self.spawn_piece();
        } else {
            self.state.set_active(piece);
        }

        self.drop_counter_ms = 0;
        locked
    }

    /// Repeat `drop_piece` until the engine reaches game over. This mirrors
    /// the classic "slam" behavior: pieces stack up synchronously until the
    /// spawn position is blocked. Bounded by the arena filling up, so it
    /// always terminates.
    pub fn hard_drop(&mut self) {
        while self.phase == Phase::Falling {
            self.drop_piece();
        }
    }

    /// Rotate the active piece, kicking it horizontally if the rotated shape
    /// collides. Kick offsets are cumulative: +1, -2, +3, -4, ... (alternating
    /// sign, magnitude growing by one), re-tested after each shift. The search
    /// aborts once the next offset's magnitude exceeds the pre-rotation matrix
    /// width; on abort the original matrix and position are restored.
    pub fn rotate_piece(&mut self, dir: RotateDir) {
        if self.phase != Phase::Falling {
            return;
        }
        let Some(mut piece) = self.state.take_active() else {
            return;
        };

        let original = piece.clone();
        let kick_bound = original.matrix.width() as i32;
        piece.rotate(dir);

        let mut offset: i32 = 1;
        while collides(self.state.arena(), &piece) {
            piece.x += offset;
            offset = -(offset + offset.signum());
            if offset.abs() > kick_bound {
                piece = original;
                break;
            }
        }
        self.state.set_active(piece);
    }

    /// Instantiate the standby piece horizontally centered at the top row,
    /// then queue a fresh uniform-random piece as the preview.
    ///
    /// Game over triggers only when the arena already holds at least one
    /// settled cell AND the new piece collides at its spawn position; the
    /// very first spawn into an empty arena always succeeds.
    fn spawn_piece(&mut self) {
        let matrix = self.config.pieces[self.standby].matrix.clone();
        let x = (self.config.arena_width as i32 - matrix.width() as i32) / 2;
        let piece = Piece::new(matrix, x, 0);

        if !self.state.arena().is_empty() && collides(self.state.arena(), &piece) {
            self.phase = Phase::GameOver;
            return;
        }

        self.state.set_active(piece);
        self.phase = Phase::Falling;

        self.standby = self.rng.next_range(self.config.pieces.len() as u32) as usize;
        let preview = self.config.pieces[self.standby].matrix.clone();
        self.state.set_next(Piece::new(preview, 0, 0));
    }

    /// Clear every completed row in one bottom-to-top pass and apply a single
    /// scoring update. After removing row `y` the same index is re-tested,
    /// since the row shifted into its place may be complete as well.
    fn clear_rows(&mut self) {
        let mut rows_cleared: u32 = 0;

        let mut y = self.state.arena().height();
        while y > 0 {
            y -= 1;
            while self.state.arena().row_is_full(y) {
                self.state.clear_row(y);
                rows_cleared += 1;
            }
        }

        if rows_cleared > 0 && self.state.update_score(rows_cleared) {
            self.drop_interval_ms = self
                .drop_interval_ms
                .saturating_sub(self.config.level_speedup_ms)
                .max(self.config.min_drop_ms);
        }
    }
}
