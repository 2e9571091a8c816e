//! Text boundary of the engine.
//!
//! Board file loading and encoding, the player command parser, and the
//! serializable game snapshot.

pub mod layout;
pub mod parser;
pub mod snapshot;

pub use layout::{encode_layout, encode_tile, parse_layout, parse_tile, Layout, LayoutError};
pub use parser::{parse_command, Command};
pub use snapshot::{GameSnapshot, PlayerSnapshot, TileSnapshot};
