//! `Scheduler` — greedy cost-minimizing dispatch of a task backlog.

use std::collections::VecDeque;

use ds_core::SimTime;
use ds_cost::CostModel;

use crate::{Actor, ActorSnapshot, Executor};

/// Cost at or above which the scheduler stops dispatching for the current
/// round and lets the backlog wait.  Inherited from the system this simulator
/// models; override per run with [`Scheduler::with_saturation_threshold`].
pub const DEFAULT_SATURATION_THRESHOLD: f64 = 100.0;

/// The dispatcher.  Holds the unassigned backlog and routes it onto executor
/// pending queues one task at a time, always to the currently cheapest
/// executor, until the backlog is empty or every executor is saturated.
///
/// The scheduler has no timed events of its own — decisions are instantaneous
/// within the driver's horizon — so its `peek` is always the horizon itself.
pub struct Scheduler<C: CostModel> {
    label:                String,
    /// Unassigned task durations, in arrival order.
    pending:              VecDeque<u64>,
    cost:                 C,
    saturation_threshold: f64,
    local_time:           SimTime,
    /// Lifetime count of dispatched tasks.
    assigned:             u64,
}

impl<C: CostModel> Scheduler<C> {
    /// Create a scheduler with an empty backlog and the default saturation
    /// threshold.
    pub fn new(label: impl Into<String>, cost: C, start: SimTime) -> Self {
        Self {
            label: label.into(),
            pending: VecDeque::new(),
            cost,
            saturation_threshold: DEFAULT_SATURATION_THRESHOLD,
            local_time: start,
            assigned: 0,
        }
    }

    /// Override the saturation cutoff.
    pub fn with_saturation_threshold(mut self, threshold: f64) -> Self {
        self.saturation_threshold = threshold;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn saturation_threshold(&self) -> f64 {
        self.saturation_threshold
    }

    /// Tasks dispatched over this scheduler's lifetime.
    pub fn assigned(&self) -> u64 {
        self.assigned
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append one task duration to the backlog.
    pub fn enqueue(&mut self, duration: u64) {
        self.pending.push_back(duration);
    }

    /// Append a batch of task durations to the backlog.
    pub fn enqueue_all(&mut self, durations: impl IntoIterator<Item = u64>) {
        self.pending.extend(durations);
    }

    /// Advance to `end`, dispatching backlog onto `executors` on the way.
    ///
    /// Repeatedly scores every executor and hands the backlog head to the
    /// cheapest one; ties go to the lowest arena index.  Costs are recomputed
    /// from scratch after every assignment, because the assignment itself
    /// changes the chosen executor's pending count.  The loop stops when the
    /// backlog is empty or the minimum cost reaches the saturation threshold
    /// — remaining tasks stay queued rather than overloading anyone.
    ///
    /// Returns the number of tasks dispatched this call.
    ///
    /// # Panics
    /// Panics if `end` precedes the current local time.
    pub fn forward(&mut self, end: SimTime, executors: &mut [Executor]) -> usize {
        assert!(
            self.local_time <= end,
            "{}: forward to {end} would rewind the clock from {}",
            self.label,
            self.local_time,
        );

        let mut dispatched = 0;
        while let Some(&duration) = self.pending.front() {
            let Some((index, score)) = self.cheapest(executors) else {
                break;
            };
            if score >= self.saturation_threshold {
                break;
            }
            self.pending.pop_front();
            executors[index].enqueue(duration);
            dispatched += 1;
        }

        self.assigned += dispatched as u64;
        self.local_time = end;
        dispatched
    }

    /// Index and score of the cheapest executor under the current load.
    ///
    /// Strict `<` keeps the first occurrence of the minimum, so equal-cost
    /// executors resolve by declaration order.  `None` only for an empty
    /// arena, which builders reject whenever there is a backlog to place.
    fn cheapest(&self, executors: &[Executor]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, executor) in executors.iter().enumerate() {
            let score = self.cost.cost(
                executor.capacity(),
                executor.running_len(),
                executor.pending_len(),
            );
            match best {
                Some((_, current)) if score >= current => {}
                _ => best = Some((index, score)),
            }
        }
        best
    }
}

impl<C: CostModel> Actor for Scheduler<C> {
    fn label(&self) -> &str {
        &self.label
    }

    fn local_time(&self) -> SimTime {
        self.local_time
    }

    /// Always the horizon: the scheduler never generates events of its own.
    fn peek(&self, end: SimTime) -> SimTime {
        end
    }

    fn dump(&self) -> ActorSnapshot {
        ActorSnapshot {
            time:     self.local_time,
            id:       self.label.clone(),
            pending:  self.pending.len(),
            running:  0,
            capacity: None,
        }
    }
}
