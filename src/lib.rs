#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use brick::*;
pub use builder::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use placement::*;
pub use types::*;

mod brick;
mod builder;
mod config;
mod engine;
mod error;
mod grid;
mod placement;
mod types;

/// Outcome of a reveal or chord expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    /// The reveal left no hidden bricks; the game is won.
    Cleared,
    /// A mine was revealed; the game is lost.
    Exploded,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Cleared => true,
            Exploded => true,
        }
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (Exploded, _) => Exploded,
            (_, Exploded) => Exploded,
            (Cleared, _) => Cleared,
            (_, Cleared) => Cleared,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_outcome_merge_is_priority_ordered() {
        use RevealOutcome::*;

        assert_eq!(Revealed | Exploded, Exploded);
        assert_eq!(Cleared | Revealed, Cleared);
        assert_eq!(Exploded | Cleared, Exploded);
        assert_eq!(NoChange | NoChange, NoChange);
        assert_eq!(NoChange | Revealed, Revealed);
    }

    #[test]
    fn only_no_change_outcomes_report_no_update() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(!FlagOutcome::NoChange.has_update());
        assert!(FlagOutcome::Toggled.has_update());
    }
}
