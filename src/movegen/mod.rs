//! Connectivity and move validation.
//!
//! Computes which cells an adventurer can reach through open edges, checks
//! single steps and teleports, and lists the slides the board accepts.

pub mod reach;
pub mod slides;
pub mod step;

pub use reach::{connected_neighbor, reachable_set, ReachableSet};
pub use slides::legal_slides;
pub use step::{step_target, teleport_target, MoveError};
