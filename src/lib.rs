//! LED matrix lookup tables for a wall of analog clock faces
//!
//! The wall shows one clock per minute of a half day. Behind it sits an LED
//! matrix built from square tile modules chained in a serpentine. This crate
//! maps grid cells to their position in that chain and exports the tables the
//! firmware uses.

pub mod args;
pub mod config;
pub mod domain;
pub mod export;
pub mod generate;
pub mod layout;
pub mod reporters;
pub mod tiling;

pub use args::{build_cli, parse_args};
pub use config::GenerationConfig;
pub use domain::{ChainIndex, GridIndex, GridPosition, GridSpec};
pub use tiling::{build_lookup_table, chain_index, TileSnakeIndexer, TilingError};
