//! Core battleship engine (no_std compatible)
//!
//! Grid, fleet catalog, placement engine, targeting strategies and the game
//! loop. Only `alloc`, `rand` and the `log` facade are required.

pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod grid;
pub mod placement;
pub mod ship;
pub mod targeting;

// Re-export commonly used types
pub use common::{BattleError, ShotOutcome, ShotRecord};
pub use config::*;
pub use fleet::{build_fleet, fleet_cells, CLASSIC_FLEET, CLASSIC_FLEET_CELLS, NUM_CLASSIC_SHIPS};
pub use game::{is_sunk, run_game, GameReport, GameSession, GameStatus};
pub use grid::{Coord, Grid};
pub use placement::{ship_fits, ship_overlaps, PlacementEngine, PlacementResult};
pub use ship::{Orientation, PlacedShip, Placement, ShipType};
pub use targeting::{
    Heading, Parity, ParityRandom, Sequential, SmartHunt, Strategy, Targeting, UniformRandom,
};
