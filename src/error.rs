use thiserror::Error;

use crate::types::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid grid size {width}x{height}")]
    InvalidSize { width: Coord, height: Coord },
    #[error("Requested {requested} mines but the grid only holds {capacity} bricks")]
    InsufficientCells {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("No brick at {coords:?} in the current grid")]
    BrickNotInGrid { coords: Coord2 },
}

pub type Result<T> = core::result::Result<T, GameError>;
