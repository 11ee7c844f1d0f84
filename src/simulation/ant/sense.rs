//! Directional ray sensing.
//!
//! An ant casts five rays (straight, one and two steps to either side). Each
//! ray sums trail and food signals cell by cell until it leaves the grid, hits
//! a wall or runs out of sight. Neighbouring rays are then blended so the ant
//! follows gradients rather than single noisy cells.

use super::super::config::Config;
use super::super::direction::{Direction, Point};
use super::super::field::{Field, Terrain};

/// Accumulated signal along one ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ray {
    /// Food pheromone plus weighted food units.
    pub food: u64,
    /// Home pheromone plus home-cell bonuses.
    pub home: u64,
    /// The ray stopped at a wall or the grid edge.
    pub wall: bool,
}

impl Ray {
    /// Casts a ray of `config.sight` cells from `origin` along `dir`. The origin cell is not sampled.
    pub fn cast(field: &Field, origin: Point, dir: Direction, config: &Config) -> Self {
        let mut ray = Ray::default();
        for i in 1..=config.sight as i32 {
            let Some(cell) = field.get(origin.step_by(dir, i)) else {
                ray.wall = true;
                break;
            };
            if cell.terrain == Terrain::Wall {
                ray.wall = true;
                break;
            }
            ray.food += u64::from(cell.food_pheromone)
                + u64::from(cell.food) * u64::from(config.food_scent);
            ray.home += u64::from(cell.home_pheromone);
            if cell.terrain == Terrain::Home {
                ray.home += u64::from(config.home_scent);
            }
        }
        ray
    }
}

/// The five rays around a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Senses {
    /// Two steps counter-clockwise.
    pub left2: Ray,
    /// One step counter-clockwise.
    pub left: Ray,
    /// Along the heading.
    pub straight: Ray,
    /// One step clockwise.
    pub right: Ray,
    /// Two steps clockwise.
    pub right2: Ray,
}

impl Senses {
    /// Casts all five rays around `heading`.
    pub fn gather(field: &Field, origin: Point, heading: Direction, config: &Config) -> Self {
        Self {
            left2: Ray::cast(field, origin, heading.left(2), config),
            left: Ray::cast(field, origin, heading.left(1), config),
            straight: Ray::cast(field, origin, heading, config),
            right: Ray::cast(field, origin, heading.right(1), config),
            right2: Ray::cast(field, origin, heading.right(2), config),
        }
    }

    /// Blends each of the three forward rays with half of each neighbour.
    ///
    /// Uses the unblended values on the right-hand side. Wall flags are kept.
    pub fn blended(&self) -> Self {
        let mix = |a: &Ray, centre: &Ray, b: &Ray| Ray {
            food: centre.food + a.food / 2 + b.food / 2,
            home: centre.home + a.home / 2 + b.home / 2,
            wall: centre.wall,
        };
        Self {
            left2: self.left2,
            left: mix(&self.left2, &self.left, &self.straight),
            straight: mix(&self.left, &self.straight, &self.right),
            right: mix(&self.straight, &self.right, &self.right2),
            right2: self.right2,
        }
    }
}

/// A relative turn chosen from the forward rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Keep the heading.
    Straight,
    /// One step counter-clockwise.
    Left,
    /// One step clockwise.
    Right,
}

impl Turn {
    /// The heading after applying this turn.
    pub fn apply(self, heading: Direction) -> Direction {
        match self {
            Turn::Straight => heading,
            Turn::Left => heading.left(1),
            Turn::Right => heading.right(1),
        }
    }
}

/// Picks the strictly greatest score; ties keep going straight.
pub fn pick_max<T: PartialOrd>(left: T, straight: T, right: T) -> Turn {
    if left > straight && left > right {
        Turn::Left
    } else if right > straight && right > left {
        Turn::Right
    } else {
        Turn::Straight
    }
}

/// Picks the strictly smallest score; ties keep going straight.
pub fn pick_min<T: PartialOrd>(left: T, straight: T, right: T) -> Turn {
    if left < straight && left < right {
        Turn::Left
    } else if right < straight && right < left {
        Turn::Right
    } else {
        Turn::Straight
    }
}

/// Score minimized by antisocial foragers: busy home trails repel, food attracts.
pub fn antisocial_score(ray: &Ray) -> i128 {
    i128::from(ray.home) - 2 * i128::from(ray.food)
}

/// Turn toward the open side when a wall sits two steps off the heading.
///
/// Only consulted when scoring kept the ant straight.
pub fn wall_follow(senses: &Senses) -> Turn {
    if senses.left2.wall && !senses.left.wall {
        Turn::Left
    } else if senses.right2.wall && !senses.right.wall {
        Turn::Right
    } else {
        Turn::Straight
    }
}
