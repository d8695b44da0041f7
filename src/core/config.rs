//! Game constants and the clamped session configuration.

use log::warn;

use crate::core::targeting::Strategy;

/// Column headings; one letter per addressable column.
pub const COLUMN_HEADINGS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const MAX_WIDTH: usize = 26;
pub const MAX_HEIGHT: usize = 26;
/// Upper bound on the fleet multiplier.
pub const MAX_SHIP_GROUPS: usize = 100;
/// Placement draws allowed for a whole fleet before giving up.
pub const MAX_TIMEOUT: u32 = 100_000;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_SHIP_GROUPS: usize = 1;

/// Ship grid cell holding no ship.
pub const EMPTY_CHAR: char = '.';
/// Shot grid cell never fired upon.
pub const NO_SHOT_CHAR: char = ' ';
/// Shot grid cell fired upon without hitting anything.
pub const MISS_CHAR: char = 'X';

/// Settings for one game session.
///
/// Always constructed through [`GameConfig::new`], which clamps every value
/// into its supported range instead of rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameConfig {
    width: usize,
    height: usize,
    multiplier: usize,
    strategy: Strategy,
}

impl GameConfig {
    pub fn new(width: usize, height: usize, multiplier: usize, strategy: Strategy) -> Self {
        Self {
            width: clamp_setting("width", width, 1, MAX_WIDTH),
            height: clamp_setting("height", height, 1, MAX_HEIGHT),
            multiplier: clamp_setting("ship groups", multiplier, 0, MAX_SHIP_GROUPS),
            strategy,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of classic ship groups; `0` means a lone carrier.
    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            DEFAULT_SHIP_GROUPS,
            Strategy::default(),
        )
    }
}

fn clamp_setting(name: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{} {} outside [{}, {}], using {}", name, value, min, max, clamped);
    }
    clamped
}
