//! Static game configuration: arena dimensions, timing, scoring constants,
//! and the piece catalogue.
//!
//! The core treats the catalogue as an opaque input: it enumerates whatever
//! shapes are configured and never assumes a particular count.

use anyhow::{bail, Result};

use crate::core::Matrix;
use crate::types::{CellValue, Rgb};

/// One entry of the piece catalogue: a tag for display/debugging plus the
/// canonical spawn-orientation shape matrix. Occupied cells all carry the
/// piece's color index.
#[derive(Debug, Clone)]
pub struct PieceSpec {
    pub tag: char,
    pub matrix: Matrix,
}

/// Read-only configuration supplied to the engine at construction.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Arena width in cells.
    pub arena_width: usize,
    /// Arena height in cells.
    pub arena_height: usize,
    /// Gravity interval at level 1, in milliseconds.
    pub initial_drop_ms: u32,
    /// Lower bound for the gravity interval.
    pub min_drop_ms: u32,
    /// How much the gravity interval shrinks per level-up.
    pub level_speedup_ms: u32,
    /// Score required per level: the next level starts at `level * threshold`.
    pub level_score_threshold: u32,
    /// Points awarded per cleared row.
    pub rows_cleared_score: u32,
    /// Piece catalogue, enumerated by the engine's random picker.
    pub pieces: Vec<PieceSpec>,
    /// Colors indexed by cell value; index 0 is unused (empty cells).
    pub colors: Vec<Rgb>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 10,
            arena_height: 20,
            initial_drop_ms: 1000,
            min_drop_ms: 200,
            level_speedup_ms: 200,
            level_score_threshold: 50,
            rows_cleared_score: 10,
            pieces: vec![
                PieceSpec {
                    tag: 'I',
                    matrix: Matrix::from_rows(&[
                        &[0, 0, 0, 0],
                        &[1, 1, 1, 1],
                        &[0, 0, 0, 0],
                        &[0, 0, 0, 0],
                    ]),
                },
                PieceSpec {
                    tag: 'J',
                    matrix: Matrix::from_rows(&[&[2, 0, 0], &[2, 2, 2], &[0, 0, 0]]),
                },
                PieceSpec {
                    tag: 'L',
                    matrix: Matrix::from_rows(&[&[0, 0, 3], &[3, 3, 3], &[0, 0, 0]]),
                },
                PieceSpec {
                    tag: 'O',
                    matrix: Matrix::from_rows(&[&[4, 4], &[4, 4]]),
                },
                PieceSpec {
                    tag: 'S',
                    matrix: Matrix::from_rows(&[&[0, 5, 5], &[5, 5, 0], &[0, 0, 0]]),
                },
                PieceSpec {
                    tag: 'T',
                    matrix: Matrix::from_rows(&[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]]),
                },
                PieceSpec {
                    tag: 'Z',
                    matrix: Matrix::from_rows(&[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]]),
                },
            ],
            colors: vec![
                Rgb::new(0, 0, 0), // unused: empty cells
                Rgb::new(0, 255, 255),
                Rgb::new(0, 0, 255),
                Rgb::new(255, 165, 0),
                Rgb::new(255, 255, 0),
                Rgb::new(0, 128, 0),
                Rgb::new(128, 0, 128),
                Rgb::new(255, 0, 0),
            ],
        }
    }
}

impl GameConfig {
    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.arena_width == 0 || self.arena_height == 0 {
            bail!(
                "arena must have non-zero dimensions, got {}x{}",
                self.arena_width,
                self.arena_height
            );
        }
        if self.min_drop_ms > self.initial_drop_ms {
            bail!(
                "minimum drop interval {}ms exceeds initial {}ms",
                self.min_drop_ms,
                self.initial_drop_ms
            );
        }
        if self.pieces.is_empty() {
            bail!("piece catalogue is empty");
        }

        for spec in &self.pieces {
            if !spec.matrix.has_occupied() {
                bail!("piece '{}' has no occupied cells", spec.tag);
            }
            if spec.matrix.width() > self.arena_width || spec.matrix.height() > self.arena_height {
                bail!("piece '{}' does not fit the arena", spec.tag);
            }
            for (_, _, value) in spec.matrix.occupied() {
                if (value as usize) >= self.colors.len() {
                    bail!(
                        "piece '{}' uses cell value {} without a color entry",
                        spec.tag,
                        value
                    );
                }
            }
        }

        Ok(())
    }

    /// Color for a non-zero cell value, if the table has one.
    pub fn color_for(&self, value: CellValue) -> Option<Rgb> {
        if value == 0 {
            return None;
        }
        self.colors.get(value as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.pieces.len(), 7);
    }

    #[test]
    fn rejects_empty_catalogue() {
        let mut config = GameConfig::default();
        config.pieces.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_dimensions() {
        let mut config = GameConfig::default();
        config.arena_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_piece_wider_than_arena() {
        let mut config = GameConfig::default();
        config.arena_width = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_missing_color_entry() {
        let mut config = GameConfig::default();
        config.colors.truncate(4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn color_lookup() {
        let config = GameConfig::default();
        assert_eq!(config.color_for(0), None);
        assert_eq!(config.color_for(1), Some(Rgb::new(0, 255, 255)));
        assert_eq!(config.color_for(42), None);
    }
}
