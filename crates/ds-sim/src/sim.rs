//! The `Sim` struct and its driver loop.

use ds_actor::{Actor, Executor, Scheduler};
use ds_core::{SimConfig, SimTime};
use ds_cost::CostModel;

use crate::SimObserver;

/// The assembled simulation: one scheduler, an arena of executors, and the
/// global clock tying their local clocks together.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  The run is terminal once
/// `current_time` reaches `config.end_time`; there are no other driver
/// states.
pub struct Sim<C: CostModel> {
    /// Run bounds.
    pub config: SimConfig,

    /// The global clock.  Between rounds, every actor's local clock equals
    /// this value.
    pub current_time: SimTime,

    /// The dispatcher.  Advanced first in every round so executors see this
    /// round's assignments before they are advanced themselves.
    pub scheduler: Scheduler<C>,

    /// The executor arena, in declaration order.  The scheduler addresses it
    /// by index; order decides cost ties.
    pub executors: Vec<Executor>,
}

impl<C: CostModel> Sim<C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current time to `config.end_time`.
    ///
    /// Calls observer hooks at every round boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.step(observer).is_some() {}
        observer.on_sim_end(self.current_time);
    }

    /// Advance one driver round.
    ///
    /// Returns the time the round landed on, or `None` if the simulation has
    /// already reached its horizon (no observer hooks fire in that case).
    /// Useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<SimTime> {
        if self.current_time >= self.config.end_time {
            return None;
        }

        let next = self.next_event_time();
        observer.on_step_start(self.current_time, next);

        observer.on_actor_snapshot(&self.scheduler.dump());
        let assigned = self.scheduler.forward(next, &mut self.executors);

        let mut completed = 0;
        for executor in &mut self.executors {
            observer.on_actor_snapshot(&executor.dump());
            completed += executor.forward(next);
        }

        self.current_time = next;
        observer.on_step_end(next, assigned, completed);
        Some(next)
    }

    // ── Peek pass ─────────────────────────────────────────────────────────

    /// The earliest event time across all actors, clamped to the horizon.
    ///
    /// Executors report their next completion; the scheduler always reports
    /// the horizon.  When nothing is in flight anywhere this returns
    /// `end_time` and the run finishes in one more round.
    fn next_event_time(&self) -> SimTime {
        let end = self.config.end_time;
        let mut next = self.scheduler.peek(end);
        for executor in &self.executors {
            next = next.min(executor.peek(end));
        }
        next
    }
}
