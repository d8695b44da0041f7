//! Common types for a session: errors and shot outcomes.

use alloc::string::String;
use core::fmt;

use crate::core::grid::Coord;

/// Result of a single shot as reported to the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ShotOutcome {
    /// Shot struck a ship cell that leaves the ship afloat.
    Hit,
    /// Shot struck open water.
    Miss,
    /// Shot struck the last intact cell of a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// One shot of a session, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotRecord {
    pub number: usize,
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// Errors surfaced by the game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// The fleet could not be placed within the attempt budget.
    PlacementTimeout { attempts: u32 },
    /// A coordinate outside the grid was requested.
    OutOfBounds { x: usize, y: usize },
    /// A cell was selected that had already been fired upon.
    AlreadyShot { x: usize, y: usize },
    /// The strategy found no unshot cell while ships remained.
    NoTargetAvailable,
    /// Strategy name not recognised.
    UnknownStrategy(String),
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::PlacementTimeout { attempts } => {
                write!(f, "Ship placement timed out after {} attempts", attempts)
            }
            BattleError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", x, y)
            }
            BattleError::AlreadyShot { x, y } => {
                write!(f, "Cell ({}, {}) has already been fired upon", x, y)
            }
            BattleError::NoTargetAvailable => write!(f, "No unshot cell left to target"),
            BattleError::UnknownStrategy(name) => write!(f, "Unknown strategy '{}'", name),
        }
    }
}

impl core::error::Error for BattleError {}
