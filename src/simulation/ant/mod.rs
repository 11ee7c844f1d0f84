//! Ant module containing agent state and perception.

mod ant;
mod sense;

// Re-export everything from the ant module
pub use ant::*;

// Re-export sensing components
pub use sense::{Ray, Senses, Turn, antisocial_score, pick_max, pick_min, wall_follow};
