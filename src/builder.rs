//! Board construction pipeline. The steps are ordered: create, derive the
//! mine total, place mines, wire adjacency, then compute per-brick counts.
//! `build` runs them in that order; calling `compute_mine_counts` before
//! placement or wiring yields stale counts.

use crate::brick::NeighborList;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::grid::Grid;
use crate::placement::MinePlacer;
use crate::types::{CellCount, Coord2};

pub fn create_grid(size: Coord2) -> Result<Grid> {
    if size.0 == 0 || size.1 == 0 {
        return Err(GameError::InvalidSize {
            width: size.0,
            height: size.1,
        });
    }
    Ok(Grid::new(size))
}

/// Maps the config's difficulty percentage over the board area, bounded to
/// `[0, width*height - 1]` so at least one safe brick always remains.
pub fn derive_mine_count(config: &GameConfig) -> CellCount {
    let total = config.total_cells();
    if total == 0 {
        return 0;
    }

    let percent = config.difficulty.mine_percent() as u32;
    let count = (total as u32 * percent / 100) as CellCount;
    count.min(total - 1)
}

pub fn place_mines(grid: &mut Grid, count: CellCount, placer: &mut dyn MinePlacer) -> Result<()> {
    let capacity = grid.total_cells();
    if count > capacity {
        return Err(GameError::InsufficientCells {
            requested: count,
            capacity,
        });
    }

    for coords in placer.pick_mines(grid.size(), count) {
        let coords = grid.validate_coords(coords)?;
        grid.brick_mut(coords).set_mine();
    }

    // double check the placed total rather than trusting the placer
    let placed: CellCount = grid
        .iter()
        .filter(|(_, brick)| brick.kind().is_mine())
        .count()
        .try_into()
        .unwrap();
    if placed != count {
        log::warn!(
            "Mine placement mismatch, actual: {}, requested: {}",
            placed,
            count
        );
    }
    grid.set_mine_count(placed);

    Ok(())
}

/// Stores each brick's king-move neighbor list, clipped to grid bounds.
pub fn wire_adjacency(grid: &mut Grid) {
    let (width, height) = grid.size();
    for x in 0..width {
        for y in 0..height {
            let neighbors: NeighborList = grid.iter_neighbors((x, y)).collect();
            grid.brick_mut((x, y)).set_neighbors(neighbors);
        }
    }
}

pub fn compute_mine_counts(grid: &mut Grid) {
    let (width, height) = grid.size();
    for x in 0..width {
        for y in 0..height {
            let count: u8 = grid[(x, y)]
                .neighbors()
                .iter()
                .filter(|&&pos| grid[pos].kind().is_mine())
                .count()
                .try_into()
                .unwrap();
            grid.brick_mut((x, y)).set_adjacent_mines(count);
        }
    }
}

/// Runs the full pipeline on a fresh grid.
pub fn build(config: &GameConfig, placer: &mut dyn MinePlacer) -> Result<Grid> {
    let mut grid = create_grid(config.size)?;
    let mines = derive_mine_count(config);
    place_mines(&mut grid, mines, placer)?;
    wire_adjacency(&mut grid);
    compute_mine_counts(&mut grid);

    log::debug!(
        "Built {}x{} grid with {} mines",
        config.size.0,
        config.size.1,
        grid.mine_count()
    );
    Ok(grid)
}
