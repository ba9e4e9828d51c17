//! Deterministic workload generation.
//!
//! The simulator itself contains no randomness — given the same initial
//! queues it always produces the same trajectory.  What *is* random is the
//! synthetic workload used to seed those queues in benchmarks and demos.
//! `WorkloadRng` keeps that setup concern reproducible: the same seed always
//! yields the same backlog and the same initial in-flight load.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::SimTime;

/// A seeded source of synthetic task durations.
pub struct WorkloadRng(SmallRng);

impl WorkloadRng {
    pub fn new(seed: u64) -> Self {
        WorkloadRng(SmallRng::seed_from_u64(seed))
    }

    /// One service-time duration, uniform in `range`.
    #[inline]
    pub fn duration(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.0.gen_range(range)
    }

    /// `count` independent durations, uniform in `range`.
    pub fn durations(&mut self, count: usize, range: RangeInclusive<u64>) -> Vec<u64> {
        (0..count).map(|_| self.0.gen_range(range.clone())).collect()
    }

    /// `count` absolute completion times for tasks already in flight at
    /// `start` — i.e. `start + d` for fresh uniform durations `d`.
    pub fn completion_times(
        &mut self,
        start: SimTime,
        count: usize,
        range: RangeInclusive<u64>,
    ) -> Vec<SimTime> {
        (0..count)
            .map(|_| start + self.0.gen_range(range.clone()))
            .collect()
    }
}
