use serde::{Deserialize, Serialize};

/// Tunables that control colony behavior.
///
/// Every field may be changed between ticks; [`super::colony::Colony::step`]
/// reads a sanitized copy each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Field decay divisor: `pher -= pher / fade_divisor + 1`. Bigger is slower.
    pub fade_divisor: u32,
    /// Marker decay divisor applied after each deposit.
    pub fade_ant_divisor: u32,
    /// Upper bound for both pheromone channels.
    pub pheromone_max: u32,
    /// Marker strength after picking up food or visiting home.
    pub fresh_marker: u32,
    /// Energy of a newly spawned ant. One unit is spent per tick.
    pub initial_life: i64,
    /// Stockpile value of one unit of food delivered home.
    pub food_life_value: i64,
    /// How much food the colony banks per ant before spawning more.
    pub stockpile_factor: i64,
    /// Hard cap on the population.
    pub max_population: usize,
    /// Ants created together with a new colony.
    pub initial_population: usize,
    /// Most food an ant can carry.
    pub max_carry: u32,
    /// Length of each sensing ray in cells.
    pub sight: u32,
    /// Weight of one unit of food in a ray's food score.
    pub food_scent: u32,
    /// Bonus added to a ray's home score for every home cell it crosses.
    pub home_scent: u32,
    /// Probability of sensing and turning on a given tick.
    pub sense_chance: f64,
    /// Probability of each random one-step nudge (left, right).
    pub wander_chance: f64,
    /// Turn along walls when sensing finds nothing better.
    pub follow_walls: bool,
    /// Foraging ants avoid busy home trails instead of following food trails.
    pub antisocial: bool,
    /// Run phases on the worker pool instead of the calling thread.
    pub parallel: bool,
    /// Side of the square home region placed at the origin.
    pub home_size: usize,
    /// Food units placed per cell by the food brush.
    pub paint_food: u32,
    /// Half-extent of the terrain brush.
    pub brush_radius: i32,
    /// Ticks between colony status log lines, 0 disables them.
    pub log_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fade_divisor: 700,
            fade_ant_divisor: 600,
            pheromone_max: 8191,
            fresh_marker: 5000,
            initial_life: 10_000,
            food_life_value: 2000,
            stockpile_factor: 1,
            max_population: 4000,
            initial_population: 3000,
            max_carry: 10,
            sight: 10,
            food_scent: 1000,
            home_scent: 8191,
            sense_chance: 0.1,
            wander_chance: 0.1,
            follow_walls: false,
            antisocial: false,
            parallel: true,
            home_size: 100,
            paint_food: 200,
            brush_radius: 20,
            log_interval: 10,
        }
    }
}

impl Config {
    /// Returns a copy with every divisor and limit clamped into its valid range.
    ///
    /// Misconfiguration is corrected here and never reported as an error.
    pub fn sanitized(&self) -> Self {
        let mut cfg = self.clone();
        cfg.fade_divisor = cfg.fade_divisor.max(1);
        cfg.fade_ant_divisor = cfg.fade_ant_divisor.max(1);
        cfg.pheromone_max = cfg.pheromone_max.max(1);
        cfg.fresh_marker = cfg.fresh_marker.min(cfg.pheromone_max);
        cfg.initial_life = cfg.initial_life.max(1);
        cfg.food_life_value = cfg.food_life_value.max(0);
        cfg.stockpile_factor = cfg.stockpile_factor.max(1);
        cfg.max_carry = cfg.max_carry.max(1);
        cfg.brush_radius = cfg.brush_radius.max(1);
        cfg.sense_chance = clamp_probability(cfg.sense_chance);
        cfg.wander_chance = clamp_probability(cfg.wander_chance).min(0.5);

        if cfg != *self {
            tracing::debug!("clamped out-of-range config values");
        }
        cfg
    }

    /// Saves the configuration to a JSON file.
    pub fn save_to_file(&self, path: &str) -> super::error::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file(path: &str) -> super::error::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
