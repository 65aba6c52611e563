//! Derived tile geometry of a grid
//!
//! A grid of `rows x cols` cells is cut into square tiles of `side x side`.
//! When a dimension is not a multiple of the tile side, the trailing
//! tile-column (or tile-row) is narrower (or shorter) than the others.
//!
//! A tile side larger than a grid dimension is clamped to that dimension, so
//! every LED count below is bounded by `rows * cols`.

use crate::domain::GridSpec;

/// Tile counts and LED counts derived from a [`GridSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    /// Width of a full tile-column: `min(tile_side, total_cols)`
    pub full_width: usize,
    /// Height of a full tile-row: `min(tile_side, total_rows)`
    pub full_height: usize,
    pub total_rows: usize,
    pub total_cols: usize,
    /// Tile-columns that are `full_width` wide
    pub full_tile_cols: usize,
    /// Width of the trailing partial tile-column (0 if none)
    pub extra_cols: usize,
    /// Tile-rows that are `full_height` tall
    pub full_tile_rows: usize,
    /// Height of the trailing partial tile-row (0 if none)
    pub extra_rows: usize,
    /// `ceil(total_cols / full_width)`
    pub tiles_per_row: usize,
    /// `ceil(total_rows / full_height)`
    pub tiles_per_col: usize,
}

impl TileGeometry {
    pub fn new(spec: &GridSpec) -> Self {
        let total_rows = spec.total_rows();
        let total_cols = spec.total_cols();
        let full_width = spec.tile_side().min(total_cols);
        let full_height = spec.tile_side().min(total_rows);

        let full_tile_cols = total_cols / full_width;
        let extra_cols = total_cols % full_width;
        let full_tile_rows = total_rows / full_height;
        let extra_rows = total_rows % full_height;

        Self {
            full_width,
            full_height,
            total_rows,
            total_cols,
            full_tile_cols,
            extra_cols,
            full_tile_rows,
            extra_rows,
            tiles_per_row: full_tile_cols + usize::from(extra_cols > 0),
            tiles_per_col: full_tile_rows + usize::from(extra_rows > 0),
        }
    }

    /// LEDs in a full tile
    pub fn leds_per_full_tile(&self) -> usize {
        self.full_height * self.full_width
    }

    /// LEDs in a full-height tile of the partial tile-column
    pub fn leds_per_partial_col_tile(&self) -> usize {
        self.full_height * self.extra_cols
    }

    /// LEDs in a full-height tile-row, partial column tile included
    pub fn leds_per_tile_row(&self) -> usize {
        self.full_height * self.total_cols
    }

    pub fn has_partial_col(&self) -> bool {
        self.extra_cols > 0
    }

    pub fn has_partial_row(&self) -> bool {
        self.extra_rows > 0
    }

    /// Width of the tiles in `tile_col`
    #[inline]
    pub fn tile_width(&self, tile_col: usize) -> usize {
        if self.has_partial_col() && tile_col == self.tiles_per_row - 1 {
            self.extra_cols
        } else {
            self.full_width
        }
    }

    /// Height of the tiles in `tile_row`
    #[inline]
    pub fn tile_height(&self, tile_row: usize) -> usize {
        if self.has_partial_row() && tile_row == self.tiles_per_col - 1 {
            self.extra_rows
        } else {
            self.full_height
        }
    }

    /// LEDs in the tile at (`tile_row`, `tile_col`)
    pub fn leds_in_tile(&self, tile_row: usize, tile_col: usize) -> usize {
        self.tile_height(tile_row) * self.tile_width(tile_col)
    }
}
