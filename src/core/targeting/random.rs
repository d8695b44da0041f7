//! Random shooters: plain uniform, and parity-restricted.

use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use super::{random_unshot, shots_fired, unshot_cells, Strategy, Targeting};
use crate::core::grid::{Coord, Grid};

/// Fires at a uniformly random unshot cell.
#[derive(Debug, Default)]
pub struct UniformRandom;

impl UniformRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for UniformRandom {
    fn strategy(&self) -> Strategy {
        Strategy::Random
    }

    fn select_target(&mut self, rng: &mut SmallRng, shots: &Grid) -> Option<Coord> {
        random_unshot(rng, shots)
    }
}

/// Parity class of a cell: whether column plus row is even or odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn matches(&self, at: Coord) -> bool {
        match self {
            Parity::Even => at.parity() == 0,
            Parity::Odd => at.parity() == 1,
        }
    }
}

/// Fires at random cells of one parity class while fewer than half the
/// grid's cells have been shot, then at any random unshot cell.
///
/// Every ship spans at least two adjacent cells, and adjacent cells differ
/// in parity, so one class alone is enough to touch every ship.
#[derive(Debug)]
pub struct ParityRandom {
    parity: Parity,
    exhausted: bool,
}

impl ParityRandom {
    pub fn new(parity: Parity) -> Self {
        Self {
            parity,
            exhausted: false,
        }
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }
}

impl Targeting for ParityRandom {
    fn strategy(&self) -> Strategy {
        match self.parity {
            Parity::Even => Strategy::RandomEven,
            Parity::Odd => Strategy::RandomOdd,
        }
    }

    fn select_target(&mut self, rng: &mut SmallRng, shots: &Grid) -> Option<Coord> {
        let unshot = unshot_cells(shots);
        if !self.exhausted && shots_fired(shots) * 2 <= shots.area() {
            let class: Vec<Coord> = unshot
                .iter()
                .copied()
                .filter(|&c| self.parity.matches(c))
                .collect();
            if let Some(&target) = class.choose(rng) {
                return Some(target);
            }
        }
        if !self.exhausted {
            debug!("{:?} parity phase over, falling back to any cell", self.parity);
            self.exhausted = true;
        }
        unshot.choose(rng).copied()
    }
}
