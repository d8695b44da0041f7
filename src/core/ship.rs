//! Ship definitions and the cells a placement occupies.

use core::fmt;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::core::grid::Coord;

/// Direction a ship extends in from its origin cell. Also used as the
/// direction of a single step between neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Orientation {
    North,
    South,
    West,
    East,
}

impl Orientation {
    /// Directions in clockwise order starting from north.
    pub const CLOCKWISE: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Column and row offset of one step. North is towards row 1.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Orientation::North => (0, -1),
            Orientation::South => (0, 1),
            Orientation::West => (-1, 0),
            Orientation::East => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Orientation::North => Orientation::South,
            Orientation::South => Orientation::North,
            Orientation::West => Orientation::East,
            Orientation::East => Orientation::West,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::North | Orientation::South)
    }
}

impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        match rng.random_range(0..4u8) {
            0 => Orientation::North,
            1 => Orientation::South,
            2 => Orientation::West,
            _ => Orientation::East,
        }
    }
}

/// Type of ship: name, grid marker and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    marker: char,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, marker: char, length: usize) -> Self {
        Self {
            name,
            marker,
            length,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Character painted into every ship grid cell the ship occupies.
    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Origin, orientation and length of a candidate or accepted ship position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    pub origin: Coord,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(origin: Coord, orientation: Orientation, length: usize) -> Self {
        Self {
            origin,
            orientation,
            length,
        }
    }

    /// Whether every cell lies within a `width`×`height` grid.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        let Coord { x, y } = self.origin;
        let size = self.length;
        if x == 0 || y == 0 || x > width || y > height {
            return false;
        }
        match self.orientation {
            Orientation::North => size <= y,
            Orientation::South => y + size <= height + 1,
            Orientation::West => size <= x,
            Orientation::East => size + x <= width + 1,
        }
    }

    /// Occupied cells starting at the origin.
    ///
    /// Only meaningful once [`Placement::fits`] holds; cells that would fall
    /// off the top or left edge are cut short.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (dx, dy) = self.orientation.delta();
        let origin = self.origin;
        (0..self.length).map_while(move |i| {
            let x = origin.x.checked_add_signed(dx * i as isize)?;
            let y = origin.y.checked_add_signed(dy * i as isize)?;
            Some(Coord::new(x, y))
        })
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.cells().any(|c| c == at)
    }
}

/// A ship whose placement has been accepted onto the ship grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlacedShip {
    pub ship: ShipType,
    pub placement: Placement,
}

impl fmt::Display for PlacedShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at {} facing {:?}",
            self.ship.name(),
            self.ship.marker(),
            self.placement.origin,
            self.placement.orientation
        )
    }
}
