//! Simulation observer trait for progress reporting and data collection.

use ds_actor::ActorSnapshot;
use ds_core::SimTime;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// driver round.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Snapshot callbacks arrive in actor
/// order within a round — scheduler first, then executors — and round by
/// round in non-decreasing time order.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_step_end(&mut self, time: SimTime, assigned: usize, completed: usize) {
///         println!("{time}: {assigned} assigned, {completed} completed");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each round, after the peek pass has chosen the
    /// round's target time.
    fn on_step_start(&mut self, _now: SimTime, _next: SimTime) {}

    /// Called once per actor per round, immediately before that actor is
    /// advanced.
    fn on_actor_snapshot(&mut self, _snapshot: &ActorSnapshot) {}

    /// Called at the end of each round.
    ///
    /// `assigned` is the number of backlog tasks the scheduler dispatched
    /// this round; `completed` the number of completions executors fired.
    fn on_step_end(&mut self, _time: SimTime, _assigned: usize, _completed: usize) {}

    /// Called once after the final round.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
