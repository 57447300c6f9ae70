//! TerminalRenderer - draws the composed game view to a real terminal.
//!
//! Full redraw every frame, queued into a byte buffer and flushed once. At a
//! couple hundred styled cells per frame this is well within budget; diffing
//! can come later if it ever matters.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::core::Engine;
use crate::term::{compose_frame, compose_preview};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed midway.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw the arena, preview box, and counters for the current state.
    pub fn draw(&mut self, engine: &Engine) -> Result<()> {
        let state = engine.state();
        let config = engine.config();
        let frame = compose_frame(state);
        let width = config.arena_width;

        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;

        // Arena with a one-character border; each cell is two columns wide to
        // compensate for the terminal glyph aspect ratio.
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(Print(format!("+{}+", "-".repeat(width * 2))))?;

        for (y, row) in frame.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16 + 1))?;
            self.buf.queue(Print("|"))?;
            for &value in row {
                self.queue_cell(value, config.color_for(value).map(to_color))?;
            }
            self.buf.queue(Print("|"))?;
        }

        let bottom = frame.len() as u16 + 1;
        self.buf.queue(cursor::MoveTo(0, bottom))?;
        self.buf.queue(Print(format!("+{}+", "-".repeat(width * 2))))?;

        // Side panel: counters and the next-piece preview.
        let panel_x = (width * 2 + 4) as u16;
        self.queue_panel_line(panel_x, 1, &format!("score  {}", state.score()))?;
        self.queue_panel_line(panel_x, 2, &format!("level  {}", state.level()))?;
        self.queue_panel_line(panel_x, 3, &format!("lines  {}", state.lines()))?;

        self.queue_panel_line(panel_x, 5, "next")?;
        for (y, row) in compose_preview(state).iter().enumerate() {
            self.buf.queue(cursor::MoveTo(panel_x, 6 + y as u16))?;
            for &value in row {
                self.queue_cell(value, config.color_for(value).map(to_color))?;
            }
            self.buf.queue(ResetColor)?;
        }

        if engine.game_over() {
            self.queue_panel_line(panel_x, 11, "GAME OVER")?;
            self.queue_panel_line(panel_x, 12, "press q to quit")?;
        }

        self.flush_buf()
    }

    fn queue_cell(&mut self, value: u8, color: Option<Color>) -> Result<()> {
        match (value, color) {
            (0, _) | (_, None) => {
                self.buf.queue(ResetColor)?;
                self.buf.queue(Print("  "))?;
            }
            (_, Some(color)) => {
                self.buf.queue(SetBackgroundColor(color))?;
                self.buf.queue(Print("  "))?;
                self.buf.queue(ResetColor)?;
            }
        }
        Ok(())
    }

    fn queue_panel_line(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_conversion() {
        assert_eq!(
            to_color(Rgb::new(0, 255, 255)),
            Color::Rgb { r: 0, g: 255, b: 255 }
        );
    }
}
