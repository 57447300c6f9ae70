//! Core game logic: pure rules and state, no I/O.

pub mod arena;
pub mod collision;
pub mod engine;
pub mod matrix;
pub mod piece;
pub mod rng;
pub mod state;

pub use arena::Arena;
pub use collision::collides;
pub use engine::{Engine, Phase};
pub use matrix::Matrix;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use state::GameState;
