//! Grid state: terrain, two pheromone channels and food per cell.
//!
//! Pheromone and food counters are atomics so that the agent phase can share a
//! `&Field` across workers. Deposits are `fetch_max` and food pickup is a
//! compare-and-swap, so concurrent ants on one cell never push a value out of
//! range. Terrain is only changed through `&mut self` by the editing API.

use ndarray::{Array2, s};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::atomic::{AtomicU32, Ordering};

use super::direction::Point;
use super::error::{Result, SimError};

/// What occupies a cell. A cell is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Terrain {
    /// Passable ground.
    #[default]
    Open,
    /// Blocks entry entirely.
    Wall,
    /// Colony region where food is banked.
    Home,
}

/// Selects one of the two pheromone channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pheromone {
    /// Laid by ants carrying food; followed by foragers.
    Food,
    /// Laid by ants without food; followed by returning ants.
    Home,
}

/// One grid cell.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Terrain kind.
    pub terrain: Terrain,
    food_pheromone: AtomicU32,
    home_pheromone: AtomicU32,
    food: AtomicU32,
}

impl Clone for Cell {
    fn clone(&self) -> Self {
        Self {
            terrain: self.terrain,
            food_pheromone: AtomicU32::new(self.food_pheromone.load(Ordering::Relaxed)),
            home_pheromone: AtomicU32::new(self.home_pheromone.load(Ordering::Relaxed)),
            food: AtomicU32::new(self.food.load(Ordering::Relaxed)),
        }
    }
}

impl Cell {
    fn channel(&self, channel: Pheromone) -> &AtomicU32 {
        match channel {
            Pheromone::Food => &self.food_pheromone,
            Pheromone::Home => &self.home_pheromone,
        }
    }

    /// A plain copy of the cell's current values.
    pub fn view(&self) -> CellView {
        CellView {
            terrain: self.terrain,
            food_pheromone: self.food_pheromone.load(Ordering::Relaxed),
            home_pheromone: self.home_pheromone.load(Ordering::Relaxed),
            food: self.food.load(Ordering::Relaxed),
        }
    }

    fn decay(&self, fade_divisor: u32) {
        fade(&self.food_pheromone, fade_divisor);
        fade(&self.home_pheromone, fade_divisor);
    }

    fn clamp_pheromones(&self, max: u32) {
        self.food_pheromone.fetch_min(max, Ordering::Relaxed);
        self.home_pheromone.fetch_min(max, Ordering::Relaxed);
    }
}

fn fade(value: &AtomicU32, fade_divisor: u32) {
    let v = value.load(Ordering::Relaxed);
    if v > 0 {
        value.store(v.saturating_sub(v / fade_divisor + 1), Ordering::Relaxed);
    }
}

/// Snapshot of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    /// Terrain kind.
    pub terrain: Terrain,
    /// Food trail strength.
    pub food_pheromone: u32,
    /// Home trail strength.
    pub home_pheromone: u32,
    /// Food units on the cell.
    pub food: u32,
}

/// A `width × height` grid of cells stored row-major (`x + y·width`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    width: usize,
    height: usize,
    /// Shape `(height, width)`, standard layout.
    cells: Array2<Cell>,
}

impl Field {
    /// Creates an open, empty field.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::EmptyField);
        }
        Ok(Self {
            width,
            height,
            cells: Array2::from_shape_fn((height, width), |_| Cell::default()),
        })
    }

    /// Creates an open field with a `home_size × home_size` home square at the origin.
    pub fn with_home(width: usize, height: usize, home_size: usize) -> Result<Self> {
        let mut field = Self::new(width, height)?;
        field.mark_home(home_size);
        Ok(field)
    }

    /// Grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `p` lies on the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.within(0, 0, self.width as i32, self.height as i32)
    }

    /// Whether an ant may enter `p`: on the grid and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.terrain != Terrain::Wall)
    }

    /// Bounds-checked cell access.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        if self.contains(p) {
            Some(&self.cells[[p.y as usize, p.x as usize]])
        } else {
            None
        }
    }

    /// Bounds-checked read of a cell's current values.
    pub fn get(&self, p: Point) -> Option<CellView> {
        self.cell(p).map(Cell::view)
    }

    /// Current strength of one channel at `p`, 0 off-grid.
    pub fn pheromone(&self, p: Point, channel: Pheromone) -> u32 {
        self.cell(p)
            .map(|c| c.channel(channel).load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// The cell array in row-major order, `None` only for non-standard layouts.
    pub fn as_slice(&self) -> Option<&[Cell]> {
        self.cells.as_slice()
    }

    fn cell_mut(&mut self, p: Point) -> Result<&mut Cell> {
        if !self.contains(p) {
            return Err(SimError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&mut self.cells[[p.y as usize, p.x as usize]])
    }

    /// Sets the terrain at `p`. Walls and home cells hold no food.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) -> Result<()> {
        let cell = self.cell_mut(p)?;
        cell.terrain = terrain;
        if terrain != Terrain::Open {
            *cell.food.get_mut() = 0;
        }
        Ok(())
    }

    /// Places `amount` food at `p`. A non-zero amount turns the cell into open ground.
    pub fn set_food(&mut self, p: Point, amount: u32) -> Result<()> {
        let cell = self.cell_mut(p)?;
        if amount > 0 {
            cell.terrain = Terrain::Open;
        }
        *cell.food.get_mut() = amount;
        Ok(())
    }

    /// Raises one channel at `p` to `value` if it is currently lower.
    ///
    /// `value` is clamped to `max` first, so deposits alone can never break
    /// the pheromone bound. Off-grid deposits are ignored.
    pub fn deposit(&self, p: Point, channel: Pheromone, value: u32, max: u32) {
        if let Some(cell) = self.cell(p) {
            cell.channel(channel).fetch_max(value.min(max), Ordering::Relaxed);
        }
    }

    /// Raises the food channel at `p`.
    pub fn deposit_food_pheromone(&self, p: Point, value: u32, max: u32) {
        self.deposit(p, Pheromone::Food, value, max);
    }

    /// Raises the home channel at `p`.
    pub fn deposit_home_pheromone(&self, p: Point, value: u32, max: u32) {
        self.deposit(p, Pheromone::Home, value, max);
    }

    /// Removes up to `max` food from `p` and returns how much was taken.
    pub fn take_food(&self, p: Point, max: u32) -> u32 {
        let Some(cell) = self.cell(p) else {
            return 0;
        };
        match cell
            .food
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |f| {
                (f > 0).then(|| f - f.min(max))
            }) {
            Ok(previous) => previous.min(max),
            Err(_) => 0,
        }
    }

    /// Fades both channels of every cell in `rows`: `pher -= pher / fade_divisor + 1`, floored at 0.
    ///
    /// Row ranges past the bottom of the grid are clipped. Disjoint ranges may
    /// be decayed concurrently.
    pub fn decay_rows(&self, rows: Range<usize>, fade_divisor: u32) {
        let end = rows.end.min(self.height);
        if rows.start >= end {
            return;
        }
        let fade_divisor = fade_divisor.max(1);
        for cell in self.cells.slice(s![rows.start..end, ..]) {
            cell.decay(fade_divisor);
        }
    }

    /// Clamps every pheromone value to `max`.
    pub fn clamp_pheromones(&self, max: u32) {
        for cell in &self.cells {
            cell.clamp_pheromones(max);
        }
    }

    /// Resets every cell and marks the home square at the origin.
    pub fn clear(&mut self, home_size: usize) {
        self.cells = Array2::from_shape_fn((self.height, self.width), |_| Cell::default());
        self.mark_home(home_size);
    }

    fn mark_home(&mut self, home_size: usize) {
        let h = home_size.min(self.height);
        let w = home_size.min(self.width);
        for cell in self.cells.slice_mut(s![..h, ..w]) {
            cell.terrain = Terrain::Home;
        }
    }

    /// Center of the home square at the origin, clamped to the grid.
    pub fn home_center(&self, home_size: usize) -> Point {
        let side = home_size.clamp(1, self.width.min(self.height));
        Point::new((side / 2) as i32, (side / 2) as i32)
    }

    /// Saves the field to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a field from a JSON file and checks its dimensions.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let field: Self = serde_json::from_str(&json)?;
        field.validate()?;
        Ok(field)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let (rows, cols) = self.cells.dim();
        if self.width == 0 || self.height == 0 {
            return Err(SimError::EmptyField);
        }
        if rows != self.height || cols != self.width {
            return Err(SimError::ShapeMismatch {
                width: self.width,
                height: self.height,
                rows,
                cols,
            });
        }
        Ok(())
    }
}
