//! Shared plain types with no game rules attached.

/// A single arena or shape-matrix cell.
/// 0 means empty; 1..=K is the color index of the piece that owns the cell.
pub type CellValue = u8;

/// Fixed host tick length in milliseconds.
pub const TICK_MS: u32 = 16;

/// Rotation direction for pieces and shape matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDir {
    Clockwise,
    CounterClockwise,
}

/// Commands accepted by the engine from the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
}

/// 24-bit RGB color used by the piece color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
