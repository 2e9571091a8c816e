//! Mazeshift engine library.
//!
//! Exposes the board representation, connectivity, turn state machine,
//! protocol, and rendering modules for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod engine;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod render;
