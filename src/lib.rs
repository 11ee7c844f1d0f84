//! # Ants - Pheromone Trail Foraging
//!
//! A colony of ants foraging on a 2D grid. Ants wander out from a home
//! region, find food, carry it back, and lay two kinds of pheromone trail on
//! the way. Trails fade every tick, so only routes that keep being walked
//! stay strong. Delivered food feeds a shared stockpile that pays for new ants.
//!
//! ## Features
//!
//! - Five-ray directional sensing with neighbour blending
//! - Marker pickup so ants reinforce existing trails instead of overwriting them
//! - Parallel agent and decay phases on a fixed worker pool
//! - Stockpile-funded spawning under a population cap
//! - Terrain brushes for walls, food and home ground
//! - Save/load of fields, whole colonies and configuration
//!
//! ## Core Modules
//!
//! - [`simulation::colony`] - Tick loop and colony state
//! - [`simulation::ant`] - Agent behavior and sensing
//! - [`simulation::field`] - Grid of terrain, food and pheromones
//! - [`simulation::scheduler`] - Worker pool for the two tick phases
//! - [`simulation::control`] - Pause/menu state and the session driver

/// Core simulation logic and data structures.
pub mod simulation {
    /// Ant state, sensing and the per-tick update.
    pub mod ant;
    /// Terrain brushes and line strokes.
    pub mod brush;
    /// Colony state and the tick sequence.
    pub mod colony;
    /// Simulation tunables.
    pub mod config;
    /// Run state and session control.
    pub mod control;
    /// Headings and grid points.
    pub mod direction;
    /// Dead-ant compaction and stockpile spawning.
    pub mod economy;
    /// Error types.
    pub mod error;
    /// The grid of cells.
    pub mod field;
    /// Pixel and agent snapshots for drawing.
    pub mod render;
    /// Parallel phase scheduling.
    pub mod scheduler;
}
