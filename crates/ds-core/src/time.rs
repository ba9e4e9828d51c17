//! Simulation time model.
//!
//! # Design
//!
//! Time is an abstract monotonically non-decreasing `SimTime` counter.  There
//! is no wall-clock mapping: a unit is whatever the workload's durations are
//! measured in.  The simulator advances time in event-driven jumps — the next
//! global time is the earliest event any actor reports — so `SimTime` values
//! are compared far more often than they are incremented.  An integer counter
//! keeps all of that exact and O(1).
//!
//! Task service times are plain `u64` durations; adding a duration to a
//! `SimTime` yields the task's absolute completion time.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point in simulated time.
///
/// Stored as `u64`: completion times are `start + duration` sums and never
/// overflow in any realistic run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// The time `duration` units after `self`.
    #[inline]
    pub fn offset(self, duration: u64) -> SimTime {
        SimTime(self.0 + duration)
    }

    /// Units elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Bounds of one simulation run.
///
/// `start_time <= end_time` is validated by the builder, not here; the struct
/// itself is plain data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Global clock value all actors start at.
    pub start_time: SimTime,
    /// Horizon at which the run terminates (inclusive upper bound on every
    /// actor clock).
    pub end_time: SimTime,
}

impl SimConfig {
    pub fn new(start_time: SimTime, end_time: SimTime) -> Self {
        Self { start_time, end_time }
    }

    /// Total simulated units covered by the run.
    #[inline]
    pub fn span(&self) -> u64 {
        self.end_time - self.start_time
    }
}
