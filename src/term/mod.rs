//! Terminal front end: pure view composition plus a crossterm renderer.

pub mod game_view;
pub mod renderer;

pub use game_view::{compose_frame, compose_preview};
pub use renderer::TerminalRenderer;
