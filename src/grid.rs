use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::brick::Brick;
use crate::error::{GameError, Result};
use crate::types::{CellCount, Coord, Coord2, NeighborIter, ToNdIndex};

/// The board: a `width x height` array of bricks plus the placed mine total.
/// Rebuilt wholesale by every `setup`; never patched in place.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    bricks: Array2<Brick>,
    mine_count: CellCount,
}

impl Grid {
    pub(crate) fn new(size: Coord2) -> Self {
        Self {
            bricks: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.bricks.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.bricks.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub(crate) fn set_mine_count(&mut self, count: CellCount) {
        self.mine_count = count;
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::BrickNotInGrid { coords })
        }
    }

    pub fn brick(&self, coords: Coord2) -> Option<&Brick> {
        self.validate_coords(coords)
            .ok()
            .map(|coords| &self.bricks[coords.to_nd_index()])
    }

    pub(crate) fn brick_mut(&mut self, coords: Coord2) -> &mut Brick {
        &mut self.bricks[coords.to_nd_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Brick)> {
        self.bricks
            .indexed_iter()
            .map(|((x, y), brick)| ((x as Coord, y as Coord), brick))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn hidden_count(&self) -> CellCount {
        self.bricks
            .iter()
            .filter(|brick| brick.visibility().is_hidden())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.bricks
            .iter()
            .filter(|brick| brick.visibility().is_flagged())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn has_revealed_mine(&self) -> bool {
        self.bricks
            .iter()
            .any(|brick| brick.kind().is_mine() && brick.visibility().is_revealed())
    }

    /// Whether any brick in `coords`' wired neighbor list is mine-kind.
    /// This existence check is the cascade trigger, not the numeric count.
    pub fn has_mine_neighbor(&self, coords: Coord2) -> bool {
        self[coords]
            .neighbors()
            .iter()
            .any(|&pos| self[pos].kind().is_mine())
    }

    pub fn flagged_neighbor_count(&self, coords: Coord2) -> u8 {
        self[coords]
            .neighbors()
            .iter()
            .filter(|&&pos| self[pos].visibility().is_flagged())
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for Grid {
    type Output = Brick;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.bricks[(x as usize, y as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_coords_rejects_out_of_bounds() {
        let grid = Grid::new((3, 2));

        assert_eq!(grid.validate_coords((2, 1)), Ok((2, 1)));
        assert_eq!(
            grid.validate_coords((3, 0)),
            Err(GameError::BrickNotInGrid { coords: (3, 0) })
        );
        assert_eq!(
            grid.validate_coords((0, 2)),
            Err(GameError::BrickNotInGrid { coords: (0, 2) })
        );
    }

    #[test]
    fn fresh_grid_is_fully_hidden() {
        let grid = Grid::new((4, 5));

        assert_eq!(grid.size(), (4, 5));
        assert_eq!(grid.total_cells(), 20);
        assert_eq!(grid.hidden_count(), 20);
        assert_eq!(grid.flagged_count(), 0);
        assert!(!grid.has_revealed_mine());
    }

    #[test]
    fn brick_access_is_checked() {
        let grid = Grid::new((2, 2));

        assert!(grid.brick((1, 1)).is_some());
        assert!(grid.brick((2, 2)).is_none());
    }
}
