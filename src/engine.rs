use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::brick::NeighborList;
use crate::builder;
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Pre-construction placeholder, never observable after `new`.
    Unknown,
    NotStarted,
    Ready,
    Ongoing,
    /// Terminal. Win and loss share this state; see [`Game::verdict`].
    Finished,
}

impl GameState {
    pub const fn is_ongoing(self) -> bool {
        matches!(self, Self::Ongoing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Win/loss distinction derived after the game finishes: lost iff a
/// mine-kind brick ended up revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Won,
    Lost,
}

pub type StateObserver = Box<dyn FnMut(GameState)>;

/// The game engine: owns the grid, drives all mutation, and notifies
/// subscribed observers synchronously on every state assignment.
pub struct Game {
    config: GameConfig,
    grid: Option<Grid>,
    state: GameState,
    placer: Box<dyn MinePlacer>,
    observers: Vec<StateObserver>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_placer(Box::new(RandomPlacer::new(0)))
    }

    /// Strategy injection for callers who bring their own entropy or fixtures.
    pub fn with_placer(placer: Box<dyn MinePlacer>) -> Self {
        let mut game = Self {
            config: GameConfig::default(),
            grid: None,
            state: GameState::Unknown,
            placer,
            observers: Vec::new(),
        };
        game.transition_to(GameState::NotStarted);
        game
    }

    /// Appends an observer; all observers are notified in registration
    /// order on every state assignment, with no de-duplication.
    pub fn subscribe(&mut self, observer: impl FnMut(GameState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        if !self.state.is_finished() {
            return None;
        }
        let grid = self.grid.as_ref()?;
        if grid.has_revealed_mine() {
            Some(Verdict::Lost)
        } else {
            Some(Verdict::Won)
        }
    }

    /// Placed mines minus flags; goes negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        match &self.grid {
            Some(grid) => grid.mine_count() as isize - grid.flagged_count() as isize,
            None => 0,
        }
    }

    /// Rebuilds the board wholesale and transitions to `Ready`. `None` uses
    /// the default config. On a builder error nothing is installed; the
    /// previous grid and state stay last-known-good.
    pub fn setup(&mut self, config: Option<GameConfig>) -> Result<()> {
        let config = config.unwrap_or_default();
        let grid = builder::build(&config, self.placer.as_mut())?;
        self.config = config;
        self.grid = Some(grid);
        self.transition_to(GameState::Ready);
        Ok(())
    }

    /// Reveals the brick at `coords`, cascading through its zero-mine
    /// region. The first reveal after setup starts the game, even when it
    /// then no-ops on a flagged brick. Silent no-op once finished.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        // lazy start: the game clock belongs to the first real action
        if self.state == GameState::Ready {
            self.transition_to(GameState::Ongoing);
        }
        if self.state != GameState::Ongoing {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = self.reveal_single_brick(coords);

        // win scan, only after a reveal that changed something; flagged
        // bricks count as resolved, so a game can be won with mines flagged
        let cleared = outcome.has_update()
            && self
                .grid
                .as_ref()
                .is_some_and(|grid| grid.hidden_count() == 0);
        if cleared {
            self.transition_to(GameState::Finished);
            return Ok(outcome | RevealOutcome::Cleared);
        }
        Ok(outcome)
    }

    /// `Hidden -> Flagged -> Hidden` round trip; no-op on revealed bricks.
    /// Deliberately not gated on game state: flagging while `Ready` or
    /// after `Finished` takes effect, gating is the caller's concern.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use Visibility::*;

        let coords = self.validate_coords(coords)?;
        let Some(grid) = self.grid.as_mut() else {
            return Err(GameError::BrickNotInGrid { coords });
        };

        let brick = grid.brick_mut(coords);
        Ok(match brick.visibility() {
            Hidden => {
                brick.set_visibility(Flagged);
                FlagOutcome::Toggled
            }
            Flagged => {
                brick.set_visibility(Hidden);
                FlagOutcome::Toggled
            }
            Revealed => FlagOutcome::NoChange,
        })
    }

    /// Chord expansion: once the flags around a revealed brick account for
    /// all its adjacent mines, reveals every neighbor. A misplaced flag
    /// lets this reveal a mine and lose the game.
    pub fn expand_covered_area(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self.can_expand(coords) {
            return Ok(RevealOutcome::NoChange);
        }
        let Some(grid) = self.grid.as_ref() else {
            return Ok(RevealOutcome::NoChange);
        };
        // snapshot, the reveals below mutate the grid
        let neighbors: NeighborList = grid[coords].neighbors().iter().copied().collect();

        log::debug!("Expanding covered area around {:?}", coords);
        let mut outcome = RevealOutcome::NoChange;
        for pos in neighbors {
            outcome = outcome | self.reveal(pos)?;
        }
        Ok(outcome)
    }

    /// Whether chord expansion at `coords` would pass its safety gate: the
    /// brick is revealed and its flagged neighbors account for every
    /// adjacent mine (an over-flagged brick passes).
    pub fn can_expand(&self, coords: Coord2) -> bool {
        let Some(grid) = self.grid.as_ref() else {
            return false;
        };
        if grid.validate_coords(coords).is_err() {
            return false;
        }

        let brick = &grid[coords];
        brick.visibility().is_revealed()
            && grid.flagged_neighbor_count(coords) >= brick.adjacent_mines()
    }

    /// Worklist flood fill over the zero-mine-neighbor region. Revealing a
    /// mine finishes the game mid-cascade and freezes the rest of the
    /// worklist through the state gate.
    fn reveal_single_brick(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        let mut outcome = NoChange;
        let mut visited: HashSet<Coord2> = HashSet::new();
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.state != GameState::Ongoing {
                break;
            }
            if !visited.insert(visit_coords) {
                continue;
            }

            let Some(grid) = self.grid.as_mut() else {
                break;
            };
            let brick = grid.brick_mut(visit_coords);
            // flags protect against accidental reveal
            if !brick.visibility().is_hidden() {
                continue;
            }
            brick.set_visibility(Visibility::Revealed);
            let is_mine = brick.kind().is_mine();
            log::trace!(
                "Revealed brick at {:?}, adjacent mines: {}",
                visit_coords,
                brick.adjacent_mines()
            );

            if is_mine {
                self.transition_to(GameState::Finished);
                outcome = outcome | Exploded;
                continue;
            }
            outcome = outcome | Revealed;

            let Some(grid) = self.grid.as_ref() else {
                break;
            };
            // cascade trigger is the existence check over neighbor kinds
            if !grid.has_mine_neighbor(visit_coords) {
                to_visit.extend(
                    grid[visit_coords]
                        .neighbors()
                        .iter()
                        .copied()
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        outcome
    }

    /// Assignment first, then notification, so a callback that reads the
    /// engine sees the new state. Re-assigning the held value still
    /// notifies.
    fn transition_to(&mut self, state: GameState) {
        log::debug!("Game state: {:?} -> {:?}", self.state, state);
        self.state = state;
        for observer in &mut self.observers {
            observer(state);
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        match &self.grid {
            Some(grid) => grid.validate_coords(coords),
            None => Err(GameError::BrickNotInGrid { coords }),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
