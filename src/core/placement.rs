//! Random ship placement by rejection sampling.
//!
//! Each ship gets uniformly random origins and orientations until one both
//! fits on the grid and avoids every ship placed before it. A single attempt
//! budget covers the whole fleet, so a fleet that cannot fit ends in a
//! reported timeout instead of an endless loop.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::core::common::BattleError;
use crate::core::config::{EMPTY_CHAR, MAX_TIMEOUT};
use crate::core::grid::{Coord, Grid};
use crate::core::ship::{Orientation, PlacedShip, Placement, ShipType};

/// Outcome of placing a fleet.
///
/// When `timed_out` is set the grid holds only the ships placed before the
/// budget ran out and must not be played.
#[derive(Debug, Clone)]
pub struct PlacementResult {
    pub grid: Grid,
    pub ships: Vec<PlacedShip>,
    pub attempts: u32,
    pub timed_out: bool,
}

impl PlacementResult {
    /// Turn a timeout into `BattleError::PlacementTimeout`.
    pub fn check(self) -> Result<Self, BattleError> {
        if self.timed_out {
            Err(BattleError::PlacementTimeout {
                attempts: self.attempts,
            })
        } else {
            Ok(self)
        }
    }
}

/// Places fleets on grids of one size.
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine {
    width: usize,
    height: usize,
    max_attempts: u32,
}

impl PlacementEngine {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            max_attempts: MAX_TIMEOUT,
        }
    }

    /// Override the attempt budget shared by the whole fleet.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Uniformly random addressable cell.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        Coord::new(
            rng.random_range(1..=self.width),
            rng.random_range(1..=self.height),
        )
    }

    /// Uniformly random candidate for `ship`, not yet checked.
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R, ship: &ShipType) -> Placement {
        let origin = self.random_position(rng);
        let orientation: Orientation = rng.random();
        Placement::new(origin, orientation, ship.length())
    }

    /// Place every ship of `fleet`, in order, onto a fresh empty grid.
    pub fn place_fleet<R: Rng + ?Sized>(&self, rng: &mut R, fleet: &[ShipType]) -> PlacementResult {
        let mut grid = Grid::new(self.width, self.height, EMPTY_CHAR);
        let mut ships = Vec::with_capacity(fleet.len());
        let mut attempts = 0u32;

        for ship in fleet {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    warn!(
                        "setup timeout: placed {} of {} ships on {}x{} grid",
                        ships.len(),
                        fleet.len(),
                        self.width,
                        self.height
                    );
                    return PlacementResult {
                        grid,
                        ships,
                        attempts: self.max_attempts,
                        timed_out: true,
                    };
                }
                let placement = self.random_placement(rng, ship);
                if ship_fits(&grid, &placement) {
                    populate(&mut grid, &placement, ship.marker());
                    let placed = PlacedShip {
                        ship: *ship,
                        placement,
                    };
                    debug!("placed {} after {} attempts", placed, attempts);
                    ships.push(placed);
                    break;
                }
            }
        }

        PlacementResult {
            grid,
            ships,
            attempts,
            timed_out: false,
        }
    }
}

/// Whether any cell of `placement` is already taken on `grid`.
///
/// Cells off the grid count as taken.
pub fn ship_overlaps(grid: &Grid, placement: &Placement) -> bool {
    let mut seen = 0;
    for cell in placement.cells() {
        seen += 1;
        if grid.try_get(cell.x, cell.y) != Ok(EMPTY_CHAR) {
            return true;
        }
    }
    seen < placement.length
}

/// Whether `placement` lies within `grid` without overlapping any ship.
pub fn ship_fits(grid: &Grid, placement: &Placement) -> bool {
    placement.fits(grid.width(), grid.height()) && !ship_overlaps(grid, placement)
}

/// Paint `marker` into every cell of `placement`.
///
/// The caller has already checked [`ship_fits`].
fn populate(grid: &mut Grid, placement: &Placement, marker: char) {
    for cell in placement.cells() {
        grid.set(cell, marker);
    }
}
