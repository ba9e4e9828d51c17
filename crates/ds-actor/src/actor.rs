//! The `Actor` trait and the snapshot record it produces.

use ds_core::SimTime;

/// Read-only capabilities shared by both actor variants.
///
/// The missing third capability, `forward`, is inherent on each type — see
/// the crate docs for why.  Its contract is the same for both:
///
/// - Precondition: `local_time() <= end`.  Violations are caller bugs and
///   panic; they are not recoverable runtime faults.
/// - Postcondition: `local_time() == end`.
pub trait Actor {
    /// Human-readable identifier carried into snapshots.
    fn label(&self) -> &str;

    /// This actor's own clock.  Monotonically non-decreasing; never exceeds
    /// the horizon of the most recent `forward` call.
    fn local_time(&self) -> SimTime;

    /// The earliest time ≤ `end` at which this actor's state would change if
    /// the simulation continued.
    ///
    /// Never exceeds `end`, never precedes `local_time()`, and is idempotent:
    /// repeated calls without an intervening `forward` return the same value.
    fn peek(&self, end: SimTime) -> SimTime;

    /// Capture current state.  No side effects.
    fn dump(&self) -> ActorSnapshot;
}

/// One actor's state at one instant.
///
/// Captured by the driver immediately before each actor's `forward` call, so
/// a snapshot reflects state at the start of the interval being advanced
/// over.  Snapshots feed observability and tests only — nothing in the
/// simulation reads them back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSnapshot {
    /// The producing actor's local clock at capture time.
    pub time: SimTime,
    /// The producing actor's label.
    pub id: String,
    /// Queued durations awaiting dispatch (scheduler) or a free slot
    /// (executor).
    pub pending: usize,
    /// In-flight task count.  Always zero for the scheduler, which runs
    /// nothing itself.
    pub running: usize,
    /// Concurrency capacity.  `None` for the scheduler, which has no slots.
    pub capacity: Option<u32>,
}
