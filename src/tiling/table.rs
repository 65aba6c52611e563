//! Full lookup tables over a grid
//!
//! Every entry is independent, so the parallel build is a plain
//! `into_par_iter().map()` over the grid indices.

use super::error::{Result, TilingError};
use super::indexer::TileSnakeIndexer;
use crate::config::GenerationConfig;
use crate::domain::GridSpec;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet as HashSet;

/// Build the grid-to-chain lookup table sequentially
///
/// Entry `n` holds the chain position of row-major grid cell `n`.
pub fn build_lookup_table(spec: &GridSpec) -> Result<Vec<usize>> {
    build_lookup_table_with_config(spec, &GenerationConfig::sequential())
}

/// Build the grid-to-chain lookup table, in parallel if `config` allows it
pub fn build_lookup_table_with_config(
    spec: &GridSpec,
    config: &GenerationConfig,
) -> Result<Vec<usize>> {
    let indexer = TileSnakeIndexer::new(*spec);
    let cells = spec.cell_count();
    debug!(
        "Building lookup table for {} ({} cells, {})",
        spec,
        cells,
        if config.parallel {
            "parallel"
        } else {
            "sequential"
        }
    );

    let table: Vec<usize> = if config.parallel {
        config.install_thread_pool();
        (0..cells)
            .into_par_iter()
            .map(|n| indexer.chain_index_unchecked(n))
            .collect()
    } else {
        (0..cells)
            .map(|n| indexer.chain_index_unchecked(n))
            .collect()
    };

    Ok(table)
}

/// Invert a lookup table: entry `c` of the result is the grid index wired at
/// chain position `c`
///
/// # Errors
/// Returns `TilingError::NotABijection` if `table` is not a permutation
pub fn invert_lookup_table(table: &[usize]) -> Result<Vec<usize>> {
    verify_bijection(table)?;
    let mut inverse = vec![0usize; table.len()];
    for (grid, &chain) in table.iter().enumerate() {
        inverse[chain] = grid;
    }
    Ok(inverse)
}

/// Check that `table` maps `[0, len)` onto itself without gaps or duplicates
pub fn verify_bijection(table: &[usize]) -> Result<()> {
    let mut seen = HashSet::with_capacity_and_hasher(table.len(), Default::default());

    for (grid, &chain) in table.iter().enumerate() {
        if chain >= table.len() {
            return Err(TilingError::NotABijection(format!(
                "grid index {} maps to {}, outside [0, {})",
                grid,
                chain,
                table.len()
            )));
        }
        if !seen.insert(chain) {
            return Err(TilingError::NotABijection(format!(
                "chain position {} is used twice (again by grid index {})",
                chain, grid
            )));
        }
    }

    // len distinct values all below len: nothing can be missing
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_bijection_reports_duplicate() {
        let err = verify_bijection(&[0, 1, 1]).unwrap_err();
        assert!(err.to_string().contains("used twice"));
    }

    #[test]
    fn test_verify_bijection_reports_out_of_range() {
        assert!(matches!(
            verify_bijection(&[0, 3, 1]),
            Err(TilingError::NotABijection(_))
        ));
    }

    #[test]
    fn test_invert_lookup_table() {
        assert_eq!(invert_lookup_table(&[2, 0, 1]).unwrap(), vec![1, 2, 0]);
    }
}
