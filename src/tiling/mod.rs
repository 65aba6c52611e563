//! Tile-snake index mapping
//!
//! This module maps cells of a row-major grid onto the single serial chain
//! that an LED matrix made of square tile modules is wired in:
//! 1. Tiles are grouped in tile-rows of `tile_side` grid rows
//! 2. Even tile-rows are chained left to right, odd tile-rows right to left
//! 3. Inside a tile, LEDs are chained row-major
//! 4. A partial tile-column (right edge) and partial tile-row (bottom edge)
//!    are narrower/shorter tiles with proportionally fewer LEDs

pub mod error;
mod geometry;
mod indexer;
mod table;

pub use error::{Result, TilingError};
pub use geometry::TileGeometry;
pub use indexer::{chain_index, TileSnakeIndexer};
pub use table::{
    build_lookup_table, build_lookup_table_with_config, invert_lookup_table, verify_bijection,
};
