//! A rectangular grid of single-character cells addressed by 1-based
//! (column, row) coordinates.
//!
//! Both the ship grid and the shot grid of a session are `Grid` values; they
//! only differ in the characters written into them. Row and column `0` are
//! never addressable, they belong to the headings drawn by the renderer.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::BattleError;
use crate::core::config::{COLUMN_HEADINGS, MAX_HEIGHT, MAX_WIDTH};
use crate::core::ship::Orientation;

/// A cell address. `x` is the column (1 = `A`), `y` the row (1 = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Sum of column and row modulo 2.
    pub fn parity(&self) -> usize {
        (self.x + self.y) % 2
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMN_HEADINGS.as_bytes().get(self.x.wrapping_sub(1)) {
            Some(&col) => write!(f, "{}{}", col as char, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Rectangular character grid, at most 26×26.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a `width`×`height` grid with every cell holding `fill`.
    ///
    /// Panics if either dimension is zero or above 26; configuration is
    /// clamped long before a grid is built.
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        assert!(
            (1..=MAX_WIDTH).contains(&width) && (1..=MAX_HEIGHT).contains(&height),
            "grid dimensions {}x{} outside 1..=26",
            width,
            height
        );
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of addressable cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether (`x`, `y`) is an addressable cell.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, BattleError> {
        if self.contains(x, y) {
            Ok((y - 1) * self.width + (x - 1))
        } else {
            Err(BattleError::OutOfBounds { x, y })
        }
    }

    /// Cell value at (`x`, `y`), or `OutOfBounds`.
    pub fn try_get(&self, x: usize, y: usize) -> Result<char, BattleError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cell value at `at`.
    ///
    /// Panics when `at` lies outside the grid.
    pub fn get(&self, at: Coord) -> char {
        match self.index(at.x, at.y) {
            Ok(i) => self.cells[i],
            Err(e) => panic!("{}", e),
        }
    }

    /// Overwrite the cell at `at`.
    ///
    /// Panics when `at` lies outside the grid.
    pub fn set(&mut self, at: Coord, value: char) {
        match self.index(at.x, at.y) {
            Ok(i) => self.cells[i] = value,
            Err(e) => panic!("{}", e),
        }
    }

    /// The orthogonal neighbour of `at` in `direction`, if it is on the grid.
    pub fn neighbor(&self, at: Coord, direction: Orientation) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = at.x.checked_add_signed(dx)?;
        let y = at.y.checked_add_signed(dy)?;
        self.contains(x, y).then_some(Coord::new(x, y))
    }

    /// All coordinates in row-major order, from (1,1) to (width,height).
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Coord::new(x, y)))
    }

    /// Coordinates whose cell holds `value`, in row-major order.
    pub fn coords_with(&self, value: char) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |&c| self.get(c) == value)
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: char) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.width, self.height)?;
        for row in self.rows() {
            for &c in row {
                write!(f, "[{}]", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            for &c in row {
                write!(f, "{}", c)?;
            }
            if i + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.rows()
                .map(|row| row.iter().collect::<std::string::String>()),
        )
    }
}
