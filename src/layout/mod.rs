//! Placement of the clock faces on the grid
//!
//! One clock per minute of a half day is laid out row-major: the clock
//! showing minute `m` sits in grid cell `m`. Cells past the 720th stay empty.

mod clock_time;
pub mod error;

pub use clock_time::ClockTime;
pub use error::{LayoutError, Result};

use crate::domain::{GridIndex, GridPosition, GridSpec};
use log::debug;

/// Number of clock faces on the wall, one per minute of 12 hours
pub const MINUTES_PER_HALF_DAY: usize = 720;

/// Placement of every clock time on a grid
#[derive(Debug, Clone)]
pub struct ClockLayout {
    spec: GridSpec,
}

impl ClockLayout {
    /// # Errors
    /// Returns `LayoutError::GridTooSmall` if the grid has fewer cells than
    /// [`MINUTES_PER_HALF_DAY`]
    pub fn new(spec: GridSpec) -> Result<Self> {
        if spec.cell_count() < MINUTES_PER_HALF_DAY {
            return Err(LayoutError::GridTooSmall {
                cells: spec.cell_count(),
                required: MINUTES_PER_HALF_DAY,
            });
        }
        debug!(
            "Placing {} clocks on {} ({} spare cells)",
            MINUTES_PER_HALF_DAY,
            spec,
            spec.cell_count() - MINUTES_PER_HALF_DAY
        );
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Grid cell showing `time`
    pub fn grid_index_of(&self, time: ClockTime) -> GridIndex {
        GridIndex::new(time.minute_of_half_day())
    }

    /// Grid position showing `time`
    pub fn position_of(&self, time: ClockTime) -> GridPosition {
        let m = time.minute_of_half_day();
        GridPosition::new(m / self.spec.total_cols(), m % self.spec.total_cols())
    }

    /// Clock time shown in grid cell `index`, if any
    pub fn time_at(&self, index: GridIndex) -> Option<ClockTime> {
        ClockTime::from_minute_of_half_day(index.as_usize()).ok()
    }

    /// Minute-to-cell table: entry `m` is the grid index of the clock showing
    /// minute `m` of the half day
    pub fn led_map(&self) -> Vec<usize> {
        self.placements()
            .map(|(time, _)| self.grid_index_of(time).as_usize())
            .collect()
    }

    /// Every clock with its position, ordered by grid index
    pub fn placements(&self) -> impl Iterator<Item = (ClockTime, GridPosition)> + '_ {
        (0..MINUTES_PER_HALF_DAY).filter_map(move |m| {
            let time = ClockTime::from_minute_of_half_day(m).ok()?;
            Some((time, self.position_of(time)))
        })
    }
}
