//! Ant state and the per-tick perceive/decide/move/deposit cycle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::super::config::Config;
use super::super::direction::{Direction, Point};
use super::super::field::{Field, Pheromone, Terrain};
use super::sense::{self, Senses, Turn};

/// Attempts at finding a passable heading before giving up and teleporting.
pub const MAX_TURN_ATTEMPTS: usize = 64;

/// Where a stuck ant is moved, clamped to the grid.
///
/// The cell is not checked for walls; an ant landing on one leaves through
/// the next forced turn, since walls only block entry.
pub const FALLBACK: Point = Point::new(1, 1);

/// Behavioral mode, derived from whether the ant carries food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Looking for food; follows food trails.
    Foraging,
    /// Carrying food; follows home trails.
    Returning,
}

/// What happened to an ant during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The ant ran out of energy and took no action.
    Died,
    /// The ant acted; `banked` is the stockpile value it delivered home.
    Alive {
        /// Stockpile value delivered this tick.
        banked: i64,
    },
}

/// A single forager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ant {
    /// Grid position, always on the field. Normally passable, except after a
    /// teleport onto a walled [`FALLBACK`] cell.
    pub pos: Point,
    /// Current heading.
    pub heading: Direction,
    /// Remaining life. One unit is spent per tick; dead at `<= 0`.
    pub energy: i64,
    /// Food being carried, `0..=max_carry`.
    pub carried_food: u32,
    /// Pheromone strength this ant lays next.
    pub marker: u32,
}

impl Ant {
    /// Creates a fresh ant at `pos`.
    pub fn new(pos: Point, heading: Direction, config: &Config) -> Self {
        Self {
            pos,
            heading,
            energy: config.initial_life,
            carried_food: 0,
            marker: config.fresh_marker,
        }
    }

    /// Creates a fresh ant at `pos` with a random heading.
    pub fn new_random<R: Rng>(pos: Point, config: &Config, rng: &mut R) -> Self {
        Self::new(pos, Direction::from_index(rng.random_range(0..8)), config)
    }

    /// Checks if the ant is alive.
    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    /// Checks if the ant carries food.
    pub fn is_carrying(&self) -> bool {
        self.carried_food > 0
    }

    /// Current behavioral mode.
    pub fn mode(&self) -> Mode {
        if self.is_carrying() {
            Mode::Returning
        } else {
            Mode::Foraging
        }
    }

    /// Advances the ant by one tick.
    ///
    /// The field is shared: sensing reads it and deposits/pickups go through
    /// its atomic operations. Banked food is returned rather than added to the
    /// stockpile so callers can sum it per chunk.
    pub fn update<R: Rng>(&mut self, field: &Field, config: &Config, rng: &mut R) -> Outcome {
        self.energy -= 1;
        if !self.is_alive() {
            return Outcome::Died;
        }

        if rng.random_bool(config.sense_chance) {
            self.sense_and_turn(field, config);
        }
        self.wander(config, rng);

        if self.resolve_heading(field, rng) {
            self.pos = self.pos.step(self.heading);
        } else {
            self.pos = Point::new(
                FALLBACK.x.min(field.width() as i32 - 1),
                FALLBACK.y.min(field.height() as i32 - 1),
            );
            tracing::warn!(x = self.pos.x, y = self.pos.y, "ant boxed in, teleported to fallback");
        }

        let banked = self.arrive(field, config);
        self.deposit(field, config);
        Outcome::Alive { banked }
    }

    /// Casts rays and turns toward the strongest relevant signal.
    pub fn sense_and_turn(&mut self, field: &Field, config: &Config) {
        let raw = Senses::gather(field, self.pos, self.heading, config);
        let senses = raw.blended();

        let turn = match self.mode() {
            Mode::Returning => {
                sense::pick_max(senses.left.home, senses.straight.home, senses.right.home)
            }
            Mode::Foraging if config.antisocial => sense::pick_min(
                sense::antisocial_score(&senses.left),
                sense::antisocial_score(&senses.straight),
                sense::antisocial_score(&senses.right),
            ),
            Mode::Foraging => {
                sense::pick_max(senses.left.food, senses.straight.food, senses.right.food)
            }
        };

        let turn = if turn == Turn::Straight && config.follow_walls {
            sense::wall_follow(&raw)
        } else {
            turn
        };
        self.heading = turn.apply(self.heading);
    }

    fn wander<R: Rng>(&mut self, config: &Config, rng: &mut R) {
        if config.wander_chance <= 0.0 {
            return;
        }
        let roll: f64 = rng.random();
        if roll < config.wander_chance {
            self.heading = self.heading.left(1);
        } else if roll < 2.0 * config.wander_chance {
            self.heading = self.heading.right(1);
        }
    }

    /// Rotates by a random even offset until the next cell is passable.
    ///
    /// Returns `false` if no passable heading turned up within
    /// [`MAX_TURN_ATTEMPTS`].
    fn resolve_heading<R: Rng>(&mut self, field: &Field, rng: &mut R) -> bool {
        for _ in 0..MAX_TURN_ATTEMPTS {
            if field.is_passable(self.pos.step(self.heading)) {
                return true;
            }
            self.heading = self.heading.right((rng.random_range(0..3) - 1) * 2);
        }
        field.is_passable(self.pos.step(self.heading))
    }

    /// Applies home and food effects of the current cell. Returns banked stockpile value.
    pub fn arrive(&mut self, field: &Field, config: &Config) -> i64 {
        let Some(cell) = field.get(self.pos) else {
            return 0;
        };

        let mut banked = 0;
        if cell.terrain == Terrain::Home {
            if self.is_carrying() {
                banked = i64::from(self.carried_food).saturating_mul(config.food_life_value);
                self.carried_food = 0;
            }
            self.marker = config.fresh_marker;
        }

        if cell.food > 0 && !self.is_carrying() {
            let taken = field.take_food(self.pos, config.max_carry);
            if taken > 0 {
                self.carried_food = taken;
                self.marker = config.fresh_marker;
                self.heading = self.heading.reverse();
            }
        }
        banked
    }

    /// Lays the marker on the current cell, or picks up a stronger ambient trail.
    ///
    /// Carrying ants lay food trail, others lay home trail. If the cell already
    /// holds at least the marker, the marker rises to that value instead.
    /// Otherwise the marker is written and fades by `marker / fade_ant_divisor + 1`.
    pub fn deposit(&mut self, field: &Field, config: &Config) {
        let channel = match self.mode() {
            Mode::Returning => Pheromone::Food,
            Mode::Foraging => Pheromone::Home,
        };

        let ambient = field.pheromone(self.pos, channel);
        if ambient >= self.marker {
            self.marker = ambient;
        } else {
            field.deposit(self.pos, channel, self.marker, config.pheromone_max);
            self.marker = self
                .marker
                .saturating_sub(self.marker / config.fade_ant_divisor.max(1) + 1);
        }
    }
}
