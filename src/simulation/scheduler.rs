//! Two-phase tick scheduling on a fixed worker pool.
//!
//! Phase one updates ants, partitioned by index so each worker owns a disjoint
//! slice of the population. Phase two fades the field, partitioned by rows.
//! Each phase returns only after every worker has finished, so no decay
//! overlaps a deposit from the same tick.

use rand::Rng;
use rayon::prelude::*;
use std::ops::Range;

use super::ant::{Ant, Outcome};
use super::config::Config;
use super::error::Result;
use super::field::Field;

/// Fixed-size worker pool that runs the agent and decay phases.
///
/// The pool threads are created once and reused for every tick.
pub struct Scheduler {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl Scheduler {
    /// Builds a pool with one worker per available core.
    pub fn new() -> Result<Self> {
        let workers = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        Self::with_workers(workers)
    }

    /// Builds a pool with exactly `workers` threads (at least one).
    pub fn with_workers(workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("ant-worker-{i}"))
            .build()?;
        tracing::debug!(workers, "started worker pool");
        Ok(Self { pool, workers })
    }

    /// Number of pool threads.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Updates every ant once and returns the total stockpile value banked.
    ///
    /// With `config.parallel` the population is split into one chunk per
    /// worker and each chunk draws from its worker's thread-local generator;
    /// otherwise ants are updated in order on the calling thread using `rng`.
    /// Dead ants stay in place for compaction afterwards.
    pub fn agent_phase<R: Rng>(
        &self,
        ants: &mut [Ant],
        field: &Field,
        config: &Config,
        rng: &mut R,
    ) -> i64 {
        if !config.parallel || ants.is_empty() {
            return update_partial(ants, field, config, rng);
        }

        let chunk = ants.len() / self.workers + 1;
        self.pool.install(|| {
            ants.par_chunks_mut(chunk)
                .map(|part| update_partial(part, field, config, &mut rand::rng()))
                .reduce(|| 0, i64::saturating_add)
        })
    }

    /// Fades every cell once.
    ///
    /// With `config.parallel` each worker fades its own contiguous row range.
    pub fn decay_phase(&self, field: &Field, config: &Config) {
        if !config.parallel {
            field.decay_rows(0..field.height(), config.fade_divisor);
            return;
        }

        let ranges = partition(field.height(), self.workers);
        self.pool.install(|| {
            ranges
                .into_par_iter()
                .for_each(|rows| field.decay_rows(rows, config.fade_divisor));
        });
    }
}

/// Updates a contiguous slice of ants and sums what they banked.
fn update_partial<R: Rng>(ants: &mut [Ant], field: &Field, config: &Config, rng: &mut R) -> i64 {
    ants.iter_mut()
        .map(|ant| match ant.update(field, config, rng) {
            Outcome::Alive { banked } => banked,
            Outcome::Died => 0,
        })
        .fold(0, i64::saturating_add)
}

/// Splits `0..len` into at most `parts` contiguous, non-overlapping ranges of
/// size `len / parts + 1` (the last one shorter).
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let size = len / parts.max(1) + 1;
    (0..parts.max(1))
        .map(|i| (i * size).min(len)..((i + 1) * size).min(len))
        .filter(|r| !r.is_empty())
        .collect()
}
