//! Grid index to chain index mapping
//!
//! Tiles are wired one after another in tile-rows. Even tile-rows run left to
//! right, odd tile-rows run right to left, and inside every tile the LEDs are
//! chained in plain row-major order. The partial tile-column is always the
//! rightmost one and the partial tile-row is always the bottom one.

use super::error::Result;
use super::geometry::TileGeometry;
use crate::domain::{ChainIndex, GridIndex, GridPosition, GridSpec};

/// Maps row-major grid cells onto the serpentine tile chain
#[derive(Debug, Clone, Copy)]
pub struct TileSnakeIndexer {
    spec: GridSpec,
    geometry: TileGeometry,
}

impl TileSnakeIndexer {
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            geometry: TileGeometry::new(&spec),
        }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }

    /// Position of grid cell `index` in the wiring chain
    ///
    /// # Errors
    /// Returns `TilingError::IndexOutOfRange` if `index >= rows * cols`
    pub fn chain_index(&self, index: GridIndex) -> Result<ChainIndex> {
        let n = index.as_usize();
        self.spec.check_index(n)?;
        Ok(ChainIndex::new(self.chain_index_unchecked(n)))
    }

    /// Chain position of the cell at `position`
    pub fn chain_index_at(&self, position: GridPosition) -> Result<ChainIndex> {
        let index = self.spec.index_of(position)?;
        self.chain_index(index)
    }

    #[inline]
    pub(crate) fn chain_index_unchecked(&self, n: usize) -> usize {
        let g = &self.geometry;

        let grid_row = n / g.total_cols;
        let grid_col = n % g.total_cols;

        let tile_row = grid_row / g.full_height;
        let tile_col = grid_col / g.full_width;
        let tile_width = g.tile_width(tile_col);
        let tile_height = g.tile_height(tile_row);

        // Row stride inside the tile is the tile's own width
        let within_tile_row = grid_row - tile_row * g.full_height;
        let within_tile_col = grid_col - tile_col * g.full_width;
        let index_in_tile = within_tile_row * tile_width + within_tile_col;

        // Only the last tile-row can be short, so every row above is full height
        let leds_in_rows_above = tile_row * g.full_height * g.total_cols;

        // Grid columns covered by the tiles wired before this one in its tile-row
        let cols_before = if tile_row % 2 == 0 {
            tile_col * g.full_width
        } else {
            g.total_cols - tile_col * g.full_width - tile_width
        };
        let leds_before_current_tile = leds_in_rows_above + tile_height * cols_before;

        leds_before_current_tile + index_in_tile
    }

    /// Grid position wired at chain position `chain`
    ///
    /// # Errors
    /// Returns `TilingError::IndexOutOfRange` if `chain >= rows * cols`
    pub fn position_of(&self, chain: ChainIndex) -> Result<GridPosition> {
        let c = chain.as_usize();
        self.spec.check_index(c)?;

        let g = &self.geometry;

        let tile_row = c / g.leds_per_tile_row();
        let tile_height = g.tile_height(tile_row);
        let offset = c - tile_row * g.leds_per_tile_row();
        let full_tile_leds = tile_height * g.full_width;
        let partial_tile_leds = tile_height * g.extra_cols;

        let (tile_col, index_in_tile) = if tile_row % 2 == 0 {
            let k = offset / full_tile_leds;
            if k < g.full_tile_cols {
                (k, offset - k * full_tile_leds)
            } else {
                (g.tiles_per_row - 1, offset - g.full_tile_cols * full_tile_leds)
            }
        } else if offset < partial_tile_leds {
            (g.tiles_per_row - 1, offset)
        } else {
            let rest = offset - partial_tile_leds;
            let k = rest / full_tile_leds;
            (g.full_tile_cols - 1 - k, rest - k * full_tile_leds)
        };

        let tile_width = g.tile_width(tile_col);
        Ok(GridPosition::new(
            tile_row * g.full_height + index_in_tile / tile_width,
            tile_col * g.full_width + index_in_tile % tile_width,
        ))
    }
}

/// Position of grid cell `n` in the wiring chain of `spec`
///
/// Free-function form of [`TileSnakeIndexer::chain_index`].
pub fn chain_index(n: usize, spec: &GridSpec) -> Result<ChainIndex> {
    TileSnakeIndexer::new(*spec).chain_index(GridIndex::new(n))
}
