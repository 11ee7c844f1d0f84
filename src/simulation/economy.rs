//! Colony economy: reaping dead ants and spawning new ones from the stockpile.

use rand::Rng;

use super::ant::Ant;
use super::config::Config;
use super::direction::Point;

/// Drops dead ants, keeping survivors in their original relative order.
///
/// Returns the number of ants removed.
pub fn compact(ants: &mut Vec<Ant>) -> usize {
    let before = ants.len();
    ants.retain(Ant::is_alive);
    before - ants.len()
}

/// Most ants one tick may spawn: `max_population / initial_life`, at least 1.
pub fn spawn_budget(config: &Config) -> usize {
    let life = usize::try_from(config.initial_life.max(1)).unwrap_or(usize::MAX);
    (config.max_population / life).max(1)
}

/// Whether the stockpile can pay for one more ant at the current population.
pub fn can_spawn(population: usize, stockpile: i64, config: &Config) -> bool {
    if population >= config.max_population {
        return false;
    }
    let per_ant = config
        .initial_life
        .max(1)
        .saturating_mul(config.stockpile_factor.max(1));
    stockpile / per_ant > population as i64
}

/// Spawns ants at `nest` while the stockpile supports them, paying
/// `initial_life` per ant, for at most [`spawn_budget`] ants.
///
/// Also trims the population down to `max_population` if the cap was lowered.
/// Returns the number of ants spawned.
pub fn spawn<R: Rng>(
    ants: &mut Vec<Ant>,
    stockpile: &mut i64,
    nest: Point,
    config: &Config,
    rng: &mut R,
) -> usize {
    if ants.len() > config.max_population {
        tracing::debug!(
            excess = ants.len() - config.max_population,
            "trimming population to cap"
        );
        ants.truncate(config.max_population);
    }

    let mut spawned = 0;
    for _ in 0..spawn_budget(config) {
        if !can_spawn(ants.len(), *stockpile, config) {
            break;
        }
        *stockpile = stockpile.saturating_sub(config.initial_life);
        ants.push(Ant::new_random(nest, config, rng));
        spawned += 1;
    }
    spawned
}
