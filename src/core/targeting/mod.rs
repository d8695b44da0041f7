//! Shot selection strategies.
//!
//! A strategy is chosen once per session. Every implementation treats the
//! shot grid as the only record of which cells were already tried and never
//! returns a cell that holds anything other than [`NO_SHOT_CHAR`].

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::core::common::{BattleError, ShotRecord};
use crate::core::config::NO_SHOT_CHAR;
use crate::core::grid::{Coord, Grid};
use crate::core::ship::PlacedShip;

pub mod random;
pub mod scan;
pub mod smart;

pub use random::{Parity, ParityRandom, UniformRandom};
pub use scan::Sequential;
pub use smart::{Heading, SmartHunt};

/// Selectable targeting strategies, named as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "std", value(rename_all = "snake_case"))]
pub enum Strategy {
    /// Row-major scan from the top left cell.
    TopLeftToBottomRight,
    /// Uniformly random unshot cell.
    #[default]
    Random,
    /// Odd parity cells first, then anything.
    RandomOdd,
    /// Even parity cells first, then anything.
    RandomEven,
    /// Random hunting, then follow up on hits until the ship sinks.
    RandomSmart,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::TopLeftToBottomRight,
        Strategy::Random,
        Strategy::RandomOdd,
        Strategy::RandomEven,
        Strategy::RandomSmart,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::TopLeftToBottomRight => "top_left_to_bottom_right",
            Strategy::Random => "random",
            Strategy::RandomOdd => "random_odd",
            Strategy::RandomEven => "random_even",
            Strategy::RandomSmart => "random_smart",
        }
    }

    /// Fresh targeting state for one session.
    pub fn targeter(&self) -> Box<dyn Targeting> {
        match self {
            Strategy::TopLeftToBottomRight => Box::new(Sequential::new()),
            Strategy::Random => Box::new(UniformRandom::new()),
            Strategy::RandomOdd => Box::new(ParityRandom::new(Parity::Odd)),
            Strategy::RandomEven => Box::new(ParityRandom::new(Parity::Even)),
            Strategy::RandomSmart => Box::new(SmartHunt::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BattleError::UnknownStrategy(s.to_string()))
    }
}

/// Interface implemented by every shooter.
pub trait Targeting: Send {
    /// Strategy this targeter implements.
    fn strategy(&self) -> Strategy;

    /// Choose the next cell to fire on. Returns `None` only when every cell
    /// of `shots` has been fired upon.
    fn select_target(&mut self, rng: &mut SmallRng, shots: &Grid) -> Option<Coord>;

    /// Inform the targeter of the result of its last shot. `sunk` carries the
    /// ship that went down when the shot sank one.
    fn handle_shot_result(&mut self, _record: &ShotRecord, _sunk: Option<&PlacedShip>) {}
}

/// Whether `at` has never been fired upon.
pub fn is_unshot(shots: &Grid, at: Coord) -> bool {
    shots.get(at) == NO_SHOT_CHAR
}

/// All unshot cells in row-major order.
pub fn unshot_cells(shots: &Grid) -> Vec<Coord> {
    shots.coords_with(NO_SHOT_CHAR).collect()
}

/// Number of cells fired upon so far.
pub fn shots_fired(shots: &Grid) -> usize {
    shots.area() - shots.count(NO_SHOT_CHAR)
}

/// Uniformly random unshot cell.
pub fn random_unshot(rng: &mut SmallRng, shots: &Grid) -> Option<Coord> {
    unshot_cells(shots).choose(rng).copied()
}
