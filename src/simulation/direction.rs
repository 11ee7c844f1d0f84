//! Compass headings and integer grid coordinates.

use serde::{Deserialize, Serialize};

/// Number of compass headings.
pub const DIRECTION_COUNT: i32 = 8;

/// One of the eight compass headings, ordered clockwise starting at north.
///
/// Rotation is cyclic: [`Direction::right`] turns clockwise and
/// [`Direction::left`] counter-clockwise, both modulo 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// North (up, `y - 1`).
    #[default]
    N,
    /// North-east.
    NE,
    /// East (right, `x + 1`).
    E,
    /// South-east.
    SE,
    /// South (down, `y + 1`).
    S,
    /// South-west.
    SW,
    /// West (left, `x - 1`).
    W,
    /// North-west.
    NW,
}

impl Direction {
    /// All headings in clockwise order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Builds a heading from any integer, wrapping modulo 8.
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(DIRECTION_COUNT) {
            0 => Direction::N,
            1 => Direction::NE,
            2 => Direction::E,
            3 => Direction::SE,
            4 => Direction::S,
            5 => Direction::SW,
            6 => Direction::W,
            7 => Direction::NW,
            other => unreachable!("rem_euclid produced heading index {other}"),
        }
    }

    /// Position of this heading in clockwise order, `0..8`.
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Rotates `n` steps counter-clockwise. Negative `n` rotates clockwise.
    pub fn left(self, n: i32) -> Self {
        Self::from_index(self.index() - n)
    }

    /// Rotates `n` steps clockwise. Negative `n` rotates counter-clockwise.
    pub fn right(self, n: i32) -> Self {
        Self::from_index(self.index() + n)
    }

    /// The heading pointing the other way.
    pub fn reverse(self) -> Self {
        self.right(4)
    }

    /// Unit step `(dx, dy)` for this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
        }
    }
}

/// An integer grid coordinate. May lie outside the field while probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one step along `dir`.
    pub fn step(self, dir: Direction) -> Self {
        self.step_by(dir, 1)
    }

    /// The point `n` steps along `dir`.
    pub fn step_by(self, dir: Direction, n: i32) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx * n,
            y: self.y + dy * n,
        }
    }

    /// Whether the point lies in the rectangle `[x, x+w) × [y, y+h)`.
    pub fn within(self, x: i32, y: i32, w: i32, h: i32) -> bool {
        self.x >= x && self.x < x + w && self.y >= y && self.y < y + h
    }
}
