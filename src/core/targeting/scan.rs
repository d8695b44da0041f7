use log::debug;
use rand::rngs::SmallRng;

use super::{is_unshot, Strategy, Targeting};
use crate::core::grid::{Coord, Grid};

/// Fires at the first unshot cell in row-major order, from the top left
/// corner towards the bottom right.
#[derive(Debug, Default)]
pub struct Sequential;

impl Sequential {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for Sequential {
    fn strategy(&self) -> Strategy {
        Strategy::TopLeftToBottomRight
    }

    fn select_target(&mut self, _rng: &mut SmallRng, shots: &Grid) -> Option<Coord> {
        let target = shots.coords().find(|&c| is_unshot(shots, c))?;
        if target == Coord::new(shots.width(), shots.height()) {
            debug!("scan reached the last cell {}", target);
        }
        Some(target)
    }
}
