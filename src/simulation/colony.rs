//! The colony: field, population and stockpile, advanced one tick at a time.
//!
//! A tick runs, in order:
//! - clamping the field if `pheromone_max` was lowered
//! - the agent phase (parallel over ants) on the scheduler
//! - stockpile accrual of everything banked during that phase
//! - compaction of dead ants
//! - the decay phase (parallel over rows)
//! - the spawn pass

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ant::Ant;
use super::brush::{self, Brush};
use super::config::Config;
use super::direction::Point;
use super::economy;
use super::error::Result;
use super::field::Field;
use super::render::AgentView;
use super::scheduler::Scheduler;

/// Summary of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tick counter after this tick.
    pub tick: u64,
    /// Stockpile value delivered home during the agent phase.
    pub banked: i64,
    /// Ants removed by compaction.
    pub died: usize,
    /// Ants added by the spawn pass.
    pub spawned: usize,
    /// Population after the tick.
    pub population: usize,
}

/// All simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colony {
    /// The grid.
    pub field: Field,
    /// Live ants. Dead ones only linger inside a tick.
    pub ants: Vec<Ant>,
    /// Banked food shared by the colony.
    pub stockpile: i64,
    /// Ticks completed.
    pub tick: u64,
    /// Where new ants appear.
    pub nest: Point,
    /// Pheromone cap the field was last clamped to.
    #[serde(skip)]
    pheromone_max: Option<u32>,
}

impl Colony {
    /// Creates a colony on an open field with a home square at the origin.
    ///
    /// Starts with `initial_population` ants (capped at `max_population`) and
    /// a stockpile exactly at the spawn threshold for that population.
    pub fn new(width: usize, height: usize, config: &Config) -> Result<Self> {
        let config = config.sanitized();
        let field = Field::with_home(width, height, config.home_size)?;
        Ok(Self::with_field(field, &config))
    }

    /// Creates a colony on an existing field, clamping its pheromones to the configured cap.
    pub fn with_field(field: Field, config: &Config) -> Self {
        let config = &config.sanitized();
        field.clamp_pheromones(config.pheromone_max);
        let nest = field.home_center(config.home_size);
        let population = config.initial_population.min(config.max_population);
        let mut rng = rand::rng();
        let ants = (0..population)
            .map(|_| Ant::new_random(nest, config, &mut rng))
            .collect();

        Self {
            field,
            ants,
            stockpile: (population as i64)
                .saturating_mul(config.initial_life)
                .saturating_mul(config.stockpile_factor),
            tick: 0,
            nest,
            pheromone_max: Some(config.pheromone_max),
        }
    }

    /// Number of live ants.
    pub fn population(&self) -> usize {
        self.ants.len()
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self, scheduler: &Scheduler, config: &Config) -> TickReport {
        self.step_with_rng(scheduler, config, &mut rand::rng())
    }

    /// Advances the simulation by one tick, drawing sequential-path and spawn
    /// randomness from `rng`.
    pub fn step_with_rng<R: Rng>(
        &mut self,
        scheduler: &Scheduler,
        config: &Config,
        rng: &mut R,
    ) -> TickReport {
        let config = config.sanitized();
        self.apply_pheromone_cap(config.pheromone_max);

        let banked = scheduler.agent_phase(&mut self.ants, &self.field, &config, rng);
        self.stockpile = self.stockpile.saturating_add(banked);
        let died = economy::compact(&mut self.ants);

        scheduler.decay_phase(&self.field, &config);

        let spawned = economy::spawn(&mut self.ants, &mut self.stockpile, self.nest, &config, rng);
        self.tick += 1;

        if died > 0 || spawned > 0 {
            tracing::debug!(tick = self.tick, died, spawned, "population changed");
        }
        if config.log_interval > 0 && self.tick % config.log_interval == 0 {
            tracing::info!(
                tick = self.tick,
                stockpile = self.stockpile,
                population = self.ants.len(),
                ratio = self.stockpile / config.initial_life.saturating_mul(config.stockpile_factor),
                "colony status"
            );
        }

        TickReport {
            tick: self.tick,
            banked,
            died,
            spawned,
            population: self.ants.len(),
        }
    }

    /// Clamps the field when the cap dropped since it was last applied.
    ///
    /// Deposits never exceed the cap in force, so only a lowered cap can
    /// leave cells out of range.
    fn apply_pheromone_cap(&mut self, max: u32) {
        if self.pheromone_max.is_none_or(|applied| max < applied) {
            self.field.clamp_pheromones(max);
        }
        self.pheromone_max = Some(max);
    }

    /// Moves every ant back to the nest.
    pub fn relocate_ants(&mut self) {
        for ant in &mut self.ants {
            ant.pos = self.nest;
        }
    }

    /// Wipes the field back to open ground plus the home square and recalls all ants.
    pub fn clear(&mut self, config: &Config) {
        self.field.clear(config.home_size);
        self.nest = self.field.home_center(config.home_size);
        self.relocate_ants();
    }

    /// Drags `brush` from `from` to `to` with the configured brush radius.
    pub fn paint(&mut self, from: Point, to: Point, brush: Brush, config: &Config) {
        brush::paint_stroke(&mut self.field, from, to, config.brush_radius.max(1), brush);
    }

    /// Replaces the field, e.g. after loading one from disk, and recalls all ants.
    pub fn replace_field(&mut self, field: Field, config: &Config) {
        let config = config.sanitized();
        field.clamp_pheromones(config.pheromone_max);
        self.field = field;
        self.pheromone_max = Some(config.pheromone_max);
        self.nest = self.field.home_center(config.home_size);
        self.relocate_ants();
    }

    /// Loads a field from a JSON file into this colony.
    pub fn load_field(&mut self, path: &str, config: &Config) -> Result<()> {
        let field = Field::load_from_file(path)?;
        self.replace_field(field, config);
        tracing::info!(path, "loaded field");
        Ok(())
    }

    /// Snapshot of every live ant for drawing.
    pub fn agent_views(&self) -> Vec<AgentView> {
        self.ants.iter().map(AgentView::from).collect()
    }

    /// Saves the whole colony to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a whole colony from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let mut colony: Self = serde_json::from_str(&json)?;
        colony.field.validate()?;
        let Colony { field, ants, nest, .. } = &mut colony;
        for ant in ants.iter_mut().filter(|a| !field.contains(a.pos)) {
            ant.pos = *nest;
        }
        Ok(colony)
    }
}
