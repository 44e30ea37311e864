use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::Coord2;

/// Wired king-move adjacency list; interior bricks hold all 8 entries inline.
pub(crate) type NeighborList = SmallVec<[Coord2; 8]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    Empty,
    Mine,
}

impl BrickKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for BrickKind {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed,
    Flagged,
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One grid unit. Kind and neighbor wiring are fixed by the builder;
/// visibility mutates only through the engine operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Brick {
    kind: BrickKind,
    visibility: Visibility,
    adjacent_mines: u8,
    neighbors: NeighborList,
}

impl Brick {
    pub fn kind(&self) -> BrickKind {
        self.kind
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Mine-kind neighbor total, computed once by the builder (0..=8).
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn neighbors(&self) -> &[Coord2] {
        &self.neighbors
    }

    pub(crate) fn set_mine(&mut self) {
        self.kind = BrickKind::Mine;
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: NeighborList) {
        self.neighbors = neighbors;
    }
}
