//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use ds_actor::{Executor, Scheduler};
use ds_core::{ExecutorId, SimConfig, SimTime};
use ds_cost::CostModel;

use crate::{Sim, SimError, SimResult};

/// Initial state of one executor, as supplied by the caller.
#[derive(Clone, Debug)]
pub struct ExecutorSpec {
    /// Unique human-readable identifier, e.g. `"HPC1"`.
    pub label: String,
    /// Concurrency capacity; must be positive.
    pub capacity: u32,
    /// Absolute completion times of tasks already in flight at the start of
    /// the run.  Each must be ≥ `start_time`; at most `capacity` entries.
    pub initial_running: Vec<SimTime>,
    /// Durations already queued at this executor, in FIFO order.
    pub initial_pending: Vec<u64>,
}

impl ExecutorSpec {
    /// An idle executor spec.  Seed queues with [`running`][Self::running]
    /// and [`pending`][Self::pending].
    pub fn new(label: impl Into<String>, capacity: u32) -> Self {
        Self {
            label:           label.into(),
            capacity,
            initial_running: Vec::new(),
            initial_pending: Vec::new(),
        }
    }

    pub fn running(mut self, completions: Vec<SimTime>) -> Self {
        self.initial_running = completions;
        self
    }

    pub fn pending(mut self, durations: Vec<u64>) -> Self {
        self.initial_pending = durations;
        self
    }
}

/// Fluent builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — run bounds.
/// - `C: CostModel` — the scheduler's assignment strategy.
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                          |
/// |-----------------------------|----------------------------------|
/// | `.scheduler(label, backlog)`| `"SCHD"`, empty backlog          |
/// | `.executor(spec)`           | no executors                     |
/// | `.saturation_threshold(t)`  | `DEFAULT_SATURATION_THRESHOLD`   |
///
/// All precondition validation happens in [`build`][Self::build]; the run
/// itself is a pure deterministic computation with no failure paths.
pub struct SimBuilder<C: CostModel> {
    config:          SimConfig,
    cost:            C,
    scheduler_label: String,
    backlog:         Vec<u64>,
    threshold:       Option<f64>,
    executors:       Vec<ExecutorSpec>,
}

impl<C: CostModel> SimBuilder<C> {
    pub fn new(config: SimConfig, cost: C) -> Self {
        Self {
            config,
            cost,
            scheduler_label: "SCHD".to_owned(),
            backlog:         Vec::new(),
            threshold:       None,
            executors:       Vec::new(),
        }
    }

    /// Name the scheduler and seed its unassigned backlog.
    pub fn scheduler(mut self, label: impl Into<String>, backlog: Vec<u64>) -> Self {
        self.scheduler_label = label.into();
        self.backlog = backlog;
        self
    }

    /// Add one executor to the arena.  Arena order is declaration order and
    /// decides cost ties, so it is part of the simulation's semantics.
    pub fn executor(mut self, spec: ExecutorSpec) -> Self {
        self.executors.push(spec);
        self
    }

    /// Override the scheduler's saturation cutoff.
    pub fn saturation_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Validate all inputs and assemble a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<C>> {
        let start = self.config.start_time;

        if start > self.config.end_time {
            return Err(SimError::Config(format!(
                "start_time {start} is after end_time {}",
                self.config.end_time,
            )));
        }

        if self.executors.is_empty() && !self.backlog.is_empty() {
            return Err(SimError::Config(format!(
                "scheduler has a backlog of {} tasks but there are no executors to run them",
                self.backlog.len(),
            )));
        }

        let mut labels: HashSet<&str> = HashSet::new();
        labels.insert(self.scheduler_label.as_str());
        for spec in &self.executors {
            if !labels.insert(spec.label.as_str()) {
                return Err(SimError::Config(format!(
                    "duplicate actor label \"{}\"",
                    spec.label,
                )));
            }
            if spec.capacity == 0 {
                return Err(SimError::Config(format!(
                    "executor \"{}\" has zero capacity",
                    spec.label,
                )));
            }
            if spec.initial_running.len() > spec.capacity as usize {
                return Err(SimError::Config(format!(
                    "executor \"{}\" starts with {} running tasks but capacity {}",
                    spec.label,
                    spec.initial_running.len(),
                    spec.capacity,
                )));
            }
            if let Some(&early) = spec.initial_running.iter().find(|&&t| t < start) {
                return Err(SimError::Config(format!(
                    "executor \"{}\" has an initial completion at {early}, before start_time {start}",
                    spec.label,
                )));
            }
        }

        ds_cost::validate(&self.cost)?;

        // ── Assemble actors ───────────────────────────────────────────────
        let executors: Vec<Executor> = self
            .executors
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let mut executor =
                    Executor::new(ExecutorId(index as u32), spec.label, spec.capacity, start);
                for completion in spec.initial_running {
                    executor.load_running(completion);
                }
                for duration in spec.initial_pending {
                    executor.enqueue(duration);
                }
                executor
            })
            .collect();

        let mut scheduler = Scheduler::new(self.scheduler_label, self.cost, start);
        if let Some(threshold) = self.threshold {
            scheduler = scheduler.with_saturation_threshold(threshold);
        }
        scheduler.enqueue_all(self.backlog);

        Ok(Sim {
            current_time: start,
            config: self.config,
            scheduler,
            executors,
        })
    }
}
