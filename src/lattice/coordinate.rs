//! Axial coordinates and the six neighbor directions of a flat-topped hexagonal lattice
//!
//! Cells are addressed by `(x, y)` where the `y` axis points north and the `x`
//! axis points south-east. Under this scheme the six neighbors of a cell are
//! reached by the offsets `(0, ±1)`, `(±1, 0)` and `±(1, 1)`, with no
//! dependence on row or column parity. The lattice ends at the edge of the
//! `i32` range: a step past it has no neighbor.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::io::error::LatticeError;

/// A cell address on the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Axial column, increasing towards the south-east
    pub x: i32,
    /// Axial row, increasing towards the north
    pub y: i32,
}

impl Coordinate {
    /// The origin cell `(0, 0)`
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate from its axial components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Adjacent cell in the given direction
    ///
    /// Returns `None` when the step would leave the `i32` coordinate range.
    pub const fn neighbor(self, direction: Direction) -> Option<Self> {
        let [dx, dy] = direction.offset();
        let Some(x) = self.x.checked_add(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add(dy) else {
            return None;
        };
        Some(Self::new(x, y))
    }

    /// Adjacent cells in `Direction::ALL` order
    ///
    /// Cells at the edge of the coordinate range yield fewer than six.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(direction))
    }

    /// Number of single steps separating two cells
    pub const fn distance(self, other: Self) -> u64 {
        let dx = other.x as i64 - self.x as i64;
        let dy = other.y as i64 - self.y as i64;
        (dx.unsigned_abs() + dy.unsigned_abs() + (dx - dy).unsigned_abs()) / 2
    }

    /// Whether the two cells share an edge
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.distance(other) == 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the six compass-like labels connecting a cell to its neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    N,
    /// `(+1, +1)`
    NE,
    /// `(+1, 0)`
    SE,
    /// `(0, -1)`
    S,
    /// `(-1, -1)`
    SW,
    /// `(-1, 0)`
    NW,
}

impl Direction {
    /// Every direction, clockwise from north
    pub const ALL: [Self; 6] = [Self::N, Self::NE, Self::SE, Self::S, Self::SW, Self::NW];

    /// Axial displacement `[dx, dy]` of a single step
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::N => [0, 1],
            Self::NE => [1, 1],
            Self::SE => [1, 0],
            Self::S => [0, -1],
            Self::SW => [-1, -1],
            Self::NW => [-1, 0],
        }
    }

    /// The direction that undoes a step in this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::NW => Self::SE,
        }
    }

    /// Upper-case label as used in scripts and logs
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::NW => "NW",
        }
    }

    /// Look up a direction by its exact upper-case label
    ///
    /// Returns `None` for anything other than the six labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.label() == label)
    }
}

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        match rng.random_range(0..6_u8) {
            0 => Direction::N,
            1 => Direction::NE,
            2 => Direction::SE,
            3 => Direction::S,
            4 => Direction::SW,
            _ => Direction::NW,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| LatticeError::InvalidDirection {
            label: s.to_string(),
        })
    }
}
