//! One session: a placed fleet, a shooter, and the shot grid between them.

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::{info, trace};
use rand::rngs::SmallRng;

use crate::core::common::{BattleError, ShotOutcome, ShotRecord};
use crate::core::config::{GameConfig, EMPTY_CHAR, MISS_CHAR, NO_SHOT_CHAR};
use crate::core::fleet::build_fleet;
use crate::core::grid::Grid;
use crate::core::placement::{PlacementEngine, PlacementResult};
use crate::core::ship::PlacedShip;
use crate::core::targeting::{Strategy, Targeting};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every ship cell has been hit.
    Finished,
}

/// Read-only summary of a finished (or abandoned) session.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameReport {
    pub strategy: Strategy,
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub ships_sunk: usize,
    pub ship_grid: Grid,
    pub shot_grid: Grid,
    pub history: Vec<ShotRecord>,
}

impl GameReport {
    /// Fraction of shots that hit, `0.0` before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.hits as f64 / self.shots as f64
        }
    }
}

/// Game state owned by a single session.
pub struct GameSession {
    config: GameConfig,
    ship_grid: Grid,
    shot_grid: Grid,
    ships: Vec<PlacedShip>,
    targeter: Box<dyn Targeting>,
    history: Vec<ShotRecord>,
}

impl GameSession {
    /// Build the fleet for `config` and place it randomly.
    ///
    /// Fails with `PlacementTimeout` when the fleet cannot be placed; no
    /// session exists in that case.
    pub fn setup(config: GameConfig, rng: &mut SmallRng) -> Result<Self, BattleError> {
        let fleet = build_fleet(config.multiplier());
        let placement =
            PlacementEngine::new(config.width(), config.height()).place_fleet(rng, &fleet);
        Self::from_placement(config, placement)
    }

    /// Start a session on an existing placement, shooting with the strategy
    /// from `config`.
    pub fn from_placement(
        config: GameConfig,
        placement: PlacementResult,
    ) -> Result<Self, BattleError> {
        let placement = placement.check()?;
        let shot_grid = Grid::new(
            placement.grid.width(),
            placement.grid.height(),
            NO_SHOT_CHAR,
        );
        info!(
            "placed {} ships on {}x{} in {} attempts, shooting {}",
            placement.ships.len(),
            shot_grid.width(),
            shot_grid.height(),
            placement.attempts,
            config.strategy()
        );
        Ok(Self {
            config,
            ship_grid: placement.grid,
            shot_grid,
            ships: placement.ships,
            targeter: config.strategy().targeter(),
            history: Vec::new(),
        })
    }

    /// Replace the shooter chosen from the configured strategy.
    pub fn with_targeter(mut self, targeter: Box<dyn Targeting>) -> Self {
        self.targeter = targeter;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ship_grid(&self) -> &Grid {
        &self.ship_grid
    }

    pub fn shot_grid(&self) -> &Grid {
        &self.shot_grid
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    pub fn shots_fired(&self) -> usize {
        self.history.len()
    }

    /// Whether every ship cell has been fired upon.
    pub fn all_ships_hit(&self) -> bool {
        self.ship_grid
            .coords()
            .all(|c| self.ship_grid.get(c) == EMPTY_CHAR || self.shot_grid.get(c) != NO_SHOT_CHAR)
    }

    pub fn status(&self) -> GameStatus {
        if self.all_ships_hit() {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the strategy pick a cell and fire on it.
    ///
    /// Panics if the strategy returns a cell outside the grid.
    pub fn fire(&mut self, rng: &mut SmallRng) -> Result<ShotRecord, BattleError> {
        let coord = self
            .targeter
            .select_target(rng, &self.shot_grid)
            .ok_or(BattleError::NoTargetAvailable)?;
        if self.shot_grid.get(coord) != NO_SHOT_CHAR {
            return Err(BattleError::AlreadyShot {
                x: coord.x,
                y: coord.y,
            });
        }

        let marker = self.ship_grid.get(coord);
        let mut sunk = None;
        let outcome = if marker == EMPTY_CHAR {
            self.shot_grid.set(coord, MISS_CHAR);
            ShotOutcome::Miss
        } else {
            self.shot_grid.set(coord, marker);
            sunk = self
                .ships
                .iter()
                .find(|s| s.placement.contains(coord))
                .filter(|s| is_sunk(&self.shot_grid, s));
            match sunk {
                Some(s) => ShotOutcome::Sunk(s.ship.name()),
                None => ShotOutcome::Hit,
            }
        };

        let record = ShotRecord {
            number: self.history.len() + 1,
            coord,
            outcome,
        };
        trace!("shot {} at {}: {:?}", record.number, coord, outcome);
        self.targeter.handle_shot_result(&record, sunk);
        self.history.push(record);
        Ok(record)
    }

    /// Fire until every ship cell is hit.
    pub fn play(mut self, rng: &mut SmallRng) -> Result<GameReport, BattleError> {
        while !self.all_ships_hit() {
            self.fire(rng)?;
        }
        info!(
            "{} finished after {} shots",
            self.config.strategy(),
            self.shots_fired()
        );
        Ok(self.into_report())
    }

    pub fn into_report(self) -> GameReport {
        let hits = self.history.iter().filter(|r| r.outcome.is_hit()).count();
        let ships_sunk = self
            .ships
            .iter()
            .filter(|s| is_sunk(&self.shot_grid, s))
            .count();
        GameReport {
            strategy: self.config.strategy(),
            shots: self.history.len(),
            hits,
            misses: self.history.len() - hits,
            ships_sunk,
            ship_grid: self.ship_grid,
            shot_grid: self.shot_grid,
            history: self.history,
        }
    }
}

/// Whether every cell of `ship` has been fired upon.
pub fn is_sunk(shots: &Grid, ship: &PlacedShip) -> bool {
    ship.placement
        .cells()
        .all(|c| shots.get(c) != NO_SHOT_CHAR)
}

/// Place a fleet for `config` and play it to the end.
pub fn run_game(config: GameConfig, rng: &mut SmallRng) -> Result<GameReport, BattleError> {
    GameSession::setup(config, rng)?.play(rng)
}
