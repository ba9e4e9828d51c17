//! Plain data row types written by output backends.
//!
//! Per-actor snapshot rows reuse [`ds_actor::ActorSnapshot`] directly — it is
//! already the flat record consumers want.

/// Aggregate counters for one driver round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    /// The time the round landed on.
    pub time: u64,
    /// Backlog tasks the scheduler dispatched this round.
    pub assigned: u64,
    /// Completions executors fired this round.
    pub completed: u64,
}
