//! Hunt-then-target shooter.
//!
//! While no damaged ship is being tracked it hunts with uniformly random
//! shots. A hit switches it to target mode: neighbouring hits decide whether
//! the ship lies vertically or horizontally, and shots extend along that
//! line until the ship sinks. An isolated hit is tried above first, then
//! clockwise (right, below, left).

use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;

use super::{is_unshot, random_unshot, Strategy, Targeting};
use crate::core::common::{ShotOutcome, ShotRecord};
use crate::core::config::MISS_CHAR;
use crate::core::grid::{Coord, Grid};
use crate::core::ship::{Orientation, PlacedShip};

/// Orientation hypothesis for the ship being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Unknown,
    Vertical,
    Horizontal,
    /// Evidence for both axes; sticks until tracking resets.
    Both,
}

impl Heading {
    fn merge(self, seen: Heading) -> Heading {
        match (self, seen) {
            (h, Heading::Unknown) | (Heading::Unknown, h) => h,
            (a, b) if a == b => a,
            _ => Heading::Both,
        }
    }

    /// Axes to follow, vertical first.
    fn axes(&self) -> &'static [[Orientation; 2]] {
        const VERTICAL: [Orientation; 2] = [Orientation::North, Orientation::South];
        const HORIZONTAL: [Orientation; 2] = [Orientation::West, Orientation::East];
        match self {
            Heading::Unknown => &[],
            Heading::Vertical => &[VERTICAL],
            Heading::Horizontal => &[HORIZONTAL],
            Heading::Both => &[VERTICAL, HORIZONTAL],
        }
    }
}

#[derive(Debug, Default)]
pub struct SmartHunt {
    last_hit: Option<Coord>,
    heading: Heading,
    /// Hits on ships that have not sunk yet, oldest first.
    outstanding: Vec<Coord>,
}

impl SmartHunt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit currently being followed up, `None` while hunting.
    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    fn is_tracked(&self, at: Coord) -> bool {
        self.outstanding.contains(&at)
    }

    fn tracked_neighbor(&self, shots: &Grid, at: Coord, direction: Orientation) -> bool {
        shots
            .neighbor(at, direction)
            .is_some_and(|n| self.is_tracked(n))
    }

    fn update_heading(&mut self, shots: &Grid, hit: Coord) {
        let vertical = [Orientation::North, Orientation::South]
            .iter()
            .any(|&d| self.tracked_neighbor(shots, hit, d));
        let horizontal = [Orientation::West, Orientation::East]
            .iter()
            .any(|&d| self.tracked_neighbor(shots, hit, d));
        let seen = match (vertical, horizontal) {
            (true, true) => Heading::Both,
            (true, false) => Heading::Vertical,
            (false, true) => Heading::Horizontal,
            (false, false) => Heading::Unknown,
        };
        let heading = self.heading.merge(seen);
        if heading != self.heading {
            debug!("heading {:?} -> {:?} around {}", self.heading, heading, hit);
            self.heading = heading;
        }
    }

    /// First unshot cell past the run of tracked hits through `hit` along
    /// `axis`. The side next to a miss is tried last.
    fn extend_line(&self, shots: &Grid, hit: Coord, axis: [Orientation; 2]) -> Option<Coord> {
        let [first, second] = axis;
        let next_to_miss = shots
            .neighbor(hit, first)
            .is_some_and(|n| shots.get(n) == MISS_CHAR);
        let order = if next_to_miss {
            [second, first]
        } else {
            [first, second]
        };
        order.into_iter().find_map(|direction| {
            let mut cursor = hit;
            loop {
                let next = shots.neighbor(cursor, direction)?;
                if self.is_tracked(next) {
                    cursor = next;
                } else if is_unshot(shots, next) {
                    return Some(next);
                } else {
                    return None;
                }
            }
        })
    }

    fn follow_up(&self, shots: &Grid, hit: Coord) -> Option<Coord> {
        self.heading
            .axes()
            .iter()
            .find_map(|&axis| self.extend_line(shots, hit, axis))
            .or_else(|| {
                Orientation::CLOCKWISE
                    .iter()
                    .filter_map(|&d| shots.neighbor(hit, d))
                    .find(|&n| is_unshot(shots, n))
            })
    }

    /// Follow the most recent outstanding hit, or hunt if there is none.
    fn retarget(&mut self) {
        self.heading = Heading::Unknown;
        self.last_hit = self.outstanding.last().copied();
        match self.last_hit {
            Some(hit) => debug!("resuming target phase from {}", hit),
            None => debug!("back to hunt phase"),
        }
    }
}

impl Targeting for SmartHunt {
    fn strategy(&self) -> Strategy {
        Strategy::RandomSmart
    }

    fn select_target(&mut self, rng: &mut SmallRng, shots: &Grid) -> Option<Coord> {
        while let Some(hit) = self.last_hit {
            self.update_heading(shots, hit);
            if let Some(target) = self.follow_up(shots, hit) {
                return Some(target);
            }
            debug!("no open cell around {}, giving up on it", hit);
            self.outstanding.retain(|&c| c != hit);
            self.retarget();
        }
        random_unshot(rng, shots)
    }

    fn handle_shot_result(&mut self, record: &ShotRecord, sunk: Option<&PlacedShip>) {
        match record.outcome {
            ShotOutcome::Miss => {}
            ShotOutcome::Hit => {
                if self.last_hit.is_none() {
                    debug!("hit at {}, entering target phase", record.coord);
                }
                self.outstanding.push(record.coord);
                self.last_hit = Some(record.coord);
            }
            ShotOutcome::Sunk(name) => {
                debug!("{} sunk at {}", name, record.coord);
                self.outstanding.push(record.coord);
                if let Some(placed) = sunk {
                    self.outstanding
                        .retain(|&c| !placed.placement.contains(c));
                }
                self.retarget();
            }
        }
    }
}
