//! Core domain types for LED matrix mapping
//!
//! This module contains type-safe wrappers for grid and chain positions and
//! the immutable grid configuration.
//!
//! ## Type Safety Benefits
//!
//! - **GridIndex, ChainIndex**: Prevents mixing a row-major grid position with
//!   a position along the physical wiring chain. Both are plain `usize` values
//!   and mixing them up is the classic bug in LED matrix firmware.
//! - **GridSpec**: Validated once on construction, so every downstream
//!   computation can rely on non-zero dimensions.

use crate::tiling::error::{Result, TilingError};

/// Type-safe wrapper for a row-major grid index (`row * cols + col`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridIndex(usize);

impl GridIndex {
    pub fn new(index: usize) -> Self {
        GridIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for GridIndex {
    fn from(index: usize) -> Self {
        GridIndex::new(index)
    }
}

impl std::fmt::Display for GridIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for a position in the serial wiring chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainIndex(usize);

impl ChainIndex {
    pub fn new(index: usize) -> Self {
        ChainIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for ChainIndex {
    fn from(index: usize) -> Self {
        ChainIndex::new(index)
    }
}

impl From<ChainIndex> for usize {
    fn from(index: ChainIndex) -> usize {
        index.0
    }
}

impl std::fmt::Display for ChainIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

/// Grid dimensions and tile size of an LED matrix
///
/// Immutable once constructed. `tile_side` larger than either grid dimension
/// is accepted: the whole grid is then a single partial tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    total_rows: usize,
    total_cols: usize,
    tile_side: usize,
}

impl GridSpec {
    /// Default grid of the 720-clock wall: 24 rows of 30 clocks, 3x3 tiles
    pub const DEFAULT_ROWS: usize = 24;
    pub const DEFAULT_COLS: usize = 30;
    pub const DEFAULT_TILE_SIDE: usize = 3;

    /// Create a validated grid specification
    ///
    /// # Errors
    /// Returns `TilingError::InvalidConfiguration` if any dimension is zero or
    /// the cell count does not fit in `usize`.
    pub fn new(total_rows: usize, total_cols: usize, tile_side: usize) -> Result<Self> {
        if tile_side == 0 {
            return Err(TilingError::InvalidConfiguration(
                "tile side must be greater than zero".to_string(),
            ));
        }
        if total_rows == 0 || total_cols == 0 {
            return Err(TilingError::InvalidConfiguration(format!(
                "grid must have at least one row and one column (got {}x{})",
                total_rows, total_cols
            )));
        }
        if total_rows.checked_mul(total_cols).is_none() {
            return Err(TilingError::InvalidConfiguration(format!(
                "grid of {}x{} cells is too large",
                total_rows, total_cols
            )));
        }

        Ok(Self {
            total_rows,
            total_cols,
            tile_side,
        })
    }

    /// Build a grid spec from the `--rows`, `--cols` and `--tile-side` arguments
    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        let rows = matches
            .get_one::<usize>("rows")
            .copied()
            .unwrap_or(Self::DEFAULT_ROWS);
        let cols = matches
            .get_one::<usize>("cols")
            .copied()
            .unwrap_or(Self::DEFAULT_COLS);
        let tile_side = matches
            .get_one::<usize>("tile_side")
            .copied()
            .unwrap_or(Self::DEFAULT_TILE_SIDE);

        Self::new(rows, cols, tile_side)
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn total_cols(&self) -> usize {
        self.total_cols
    }

    pub fn tile_side(&self) -> usize {
        self.tile_side
    }

    /// Number of cells (and LEDs) in the grid
    pub fn cell_count(&self) -> usize {
        self.total_rows * self.total_cols
    }

    /// Row-major index of a grid position
    pub fn index_of(&self, position: GridPosition) -> Result<GridIndex> {
        if position.row >= self.total_rows || position.col >= self.total_cols {
            return Err(TilingError::PositionOutOfRange {
                row: position.row,
                col: position.col,
                rows: self.total_rows,
                cols: self.total_cols,
            });
        }
        Ok(GridIndex(position.row * self.total_cols + position.col))
    }

    /// Grid position of a row-major index
    pub fn position_of(&self, index: GridIndex) -> Result<GridPosition> {
        self.check_index(index.0)?;
        Ok(GridPosition::new(
            index.0 / self.total_cols,
            index.0 % self.total_cols,
        ))
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.cell_count() {
            return Err(TilingError::IndexOutOfRange {
                index,
                len: self.cell_count(),
            });
        }
        Ok(())
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            total_rows: Self::DEFAULT_ROWS,
            total_cols: Self::DEFAULT_COLS,
            tile_side: Self::DEFAULT_TILE_SIDE,
        }
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} grid, {}x{} tiles",
            self.total_rows, self.total_cols, self.tile_side, self.tile_side
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spec_rejects_zero_tile_side() {
        assert!(matches!(
            GridSpec::new(6, 6, 0),
            Err(TilingError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_grid_spec_rejects_overflowing_cell_count() {
        assert!(matches!(
            GridSpec::new(usize::MAX, 2, 3),
            Err(TilingError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_position_round_trip_on_default_grid() {
        let spec = GridSpec::default();
        let index = spec.index_of(GridPosition::new(23, 29)).unwrap();
        assert_eq!(index.as_usize(), 719);
        assert_eq!(spec.position_of(index).unwrap(), GridPosition::new(23, 29));
    }
}
