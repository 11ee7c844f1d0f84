//! Read-only snapshots for drawing the field and the ants.
//!
//! Nothing here mutates simulation state; a frame can be built between ticks
//! without blocking the scheduler.

use rayon::prelude::*;

use super::ant::Ant;
use super::direction::{Direction, Point};
use super::field::{CellView, Field, Terrain};

/// Packed ARGB for walls.
pub const WALL_COLOR: u32 = 0xFF33_3333;
/// Packed ARGB for food.
pub const FOOD_COLOR: u32 = 0xFF33_FF33;
/// Packed ARGB for home.
pub const HOME_COLOR: u32 = 0xFF33_33FF;

/// Which pheromone layers to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw pheromones at all.
    pub pheromones: bool,
    /// Include the food channel (green).
    pub food_channel: bool,
    /// Include the home channel (red).
    pub home_channel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pheromones: false,
            food_channel: true,
            home_channel: true,
        }
    }
}

/// Visual category of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    /// A wall.
    Wall,
    /// A cell holding food.
    Food,
    /// A home cell.
    Home,
    /// Pheromone blend, each channel scaled to `0..=255`.
    Pheromone {
        /// Food trail intensity.
        food: u8,
        /// Home trail intensity.
        home: u8,
    },
    /// Nothing to draw.
    Empty,
}

impl Visual {
    /// Classifies a cell. Walls win over food, food over home, home over trails.
    pub fn classify(cell: &CellView, options: &RenderOptions, pheromone_max: u32) -> Self {
        match cell.terrain {
            Terrain::Wall => return Visual::Wall,
            _ if cell.food > 0 => return Visual::Food,
            Terrain::Home => return Visual::Home,
            Terrain::Open => {}
        }
        if !options.pheromones {
            return Visual::Empty;
        }
        let food = if options.food_channel {
            intensity(cell.food_pheromone, pheromone_max)
        } else {
            0
        };
        let home = if options.home_channel {
            intensity(cell.home_pheromone, pheromone_max)
        } else {
            0
        };
        Visual::Pheromone { food, home }
    }

    /// Packed `0xAARRGGBB`-style color as used by the pixel buffer.
    pub fn argb(self) -> u32 {
        match self {
            Visual::Wall => WALL_COLOR,
            Visual::Food => FOOD_COLOR,
            Visual::Home => HOME_COLOR,
            Visual::Pheromone { food, home } => {
                0xFF00_0000 | (u32::from(food) << 8) | u32::from(home)
            }
            Visual::Empty => 0,
        }
    }
}

fn intensity(value: u32, max: u32) -> u8 {
    let scaled = u64::from(value.min(max)) * 255 / u64::from(max.max(1));
    scaled as u8
}

/// One packed color per cell, row-major. Rows are computed in parallel.
pub fn field_pixels(field: &Field, options: &RenderOptions, pheromone_max: u32) -> Vec<u32> {
    let width = field.width() as i32;
    (0..field.height() as i32)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).map(move |x| {
                field
                    .get(Point::new(x, y))
                    .map_or(0, |cell| Visual::classify(&cell, options, pheromone_max).argb())
            })
        })
        .collect()
}

/// What a renderer needs to know about one ant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentView {
    /// Grid position.
    pub pos: Point,
    /// Heading, for picking a sprite orientation.
    pub heading: Direction,
    /// Whether the ant carries food.
    pub carrying: bool,
}

impl From<&Ant> for AgentView {
    fn from(ant: &Ant) -> Self {
        Self {
            pos: ant.pos,
            heading: ant.heading,
            carrying: ant.is_carrying(),
        }
    }
}
