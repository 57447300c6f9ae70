//! blockfall - a falling-block puzzle engine with a terminal front end.
//!
//! The `core` module holds all the game rules and is I/O-free; `term` and
//! `input` are thin crossterm adapters driven by the binary's host loop.

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
