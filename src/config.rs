use serde::{Deserialize, Serialize};

use crate::types::{mult, CellCount, Coord2};

/// Mine density presets. `Custom` carries an explicit percentage, clamped to 100.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom(u8),
}

impl Difficulty {
    pub const fn mine_percent(self) -> u8 {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
            Self::Custom(percent) => {
                if percent > 100 {
                    100
                } else {
                    percent
                }
            }
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

/// Board parameters handed to `setup`. Validation happens in the builder,
/// not here; the config itself is plain copyable data.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// `(width, height)`
    pub size: Coord2,
}

impl GameConfig {
    pub const fn new(difficulty: Difficulty, size: Coord2) -> Self {
        Self { difficulty, size }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            size: (15, 20),
        }
    }
}
