//! `Executor` — a bounded-concurrency worker with FIFO admission.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use ds_core::{ExecutorId, SimTime};

use crate::{Actor, ActorSnapshot};

/// A worker that runs at most `capacity` tasks at once, admitting new work
/// from its own pending queue in FIFO order.
///
/// Running tasks are stored as absolute completion times in a min-heap:
/// completions must fire in increasing time order, because a later-admitted
/// task can finish before an earlier one and the clock may only ever jump
/// forward.  A freed slot is refilled from the pending queue within the same
/// `forward` call — the executor adds no admission latency of its own; all
/// queueing delay in the system comes from the scheduler's dispatch policy.
pub struct Executor {
    id:         ExecutorId,
    label:      String,
    capacity:   u32,
    /// Absolute completion times of in-flight tasks.  `Reverse` turns the
    /// max-heap into the min-heap the drain order requires.
    running:    BinaryHeap<Reverse<SimTime>>,
    /// Durations waiting for a free slot, in arrival order.
    pending:    VecDeque<u64>,
    local_time: SimTime,
    /// Lifetime count of completions fired.
    completed:  u64,
}

impl Executor {
    /// Create an idle executor whose clock starts at `start`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero — a zero-slot worker can never make
    /// progress, so this is a configuration bug, not a runtime state.
    pub fn new(id: ExecutorId, label: impl Into<String>, capacity: u32, start: SimTime) -> Self {
        assert!(capacity > 0, "executor capacity must be positive");
        Self {
            id,
            label: label.into(),
            capacity,
            running: BinaryHeap::new(),
            pending: VecDeque::new(),
            local_time: start,
            completed: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> ExecutorId {
        self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn running_len(&self) -> usize {
        self.running.len()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Completions fired over this executor's lifetime.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Seed an already-in-flight task by its absolute completion time.
    ///
    /// Setup-time only; the builder validates that seeded completions do not
    /// precede the run's start time and do not exceed `capacity`.
    pub fn load_running(&mut self, completion: SimTime) {
        self.running.push(Reverse(completion));
    }

    /// Append a task duration to the pending queue.
    ///
    /// This is the single mutation the scheduler may perform on an executor.
    pub fn enqueue(&mut self, duration: u64) {
        self.pending.push_back(duration);
    }

    /// Advance this executor's state up to exactly `end`.
    ///
    /// Three phases:
    /// 1. *Promote*: fill free slots from the pending queue; each admitted
    ///    duration `d` starts now and completes at `local_time + d`.
    /// 2. *Drain*: fire completions ≤ `end` in increasing order, jumping the
    ///    clock to each event and refilling the freed slot immediately.
    /// 3. *Finalize*: land the clock on `end`; completions beyond the horizon
    ///    stay queued for a later round.
    ///
    /// Returns the number of completions fired.
    ///
    /// # Panics
    /// Panics if `end` precedes the current local time.
    pub fn forward(&mut self, end: SimTime) -> usize {
        assert!(
            self.local_time <= end,
            "{}: forward to {end} would rewind the clock from {}",
            self.label,
            self.local_time,
        );

        while self.running.len() < self.capacity as usize {
            let Some(duration) = self.pending.pop_front() else {
                break;
            };
            self.running.push(Reverse(self.local_time + duration));
        }

        let mut fired = 0;
        while let Some(&Reverse(completion)) = self.running.peek() {
            if completion > end {
                break;
            }
            self.running.pop();
            self.local_time = completion;
            self.completed += 1;
            fired += 1;
            if let Some(duration) = self.pending.pop_front() {
                self.running.push(Reverse(self.local_time + duration));
            }
        }

        self.local_time = end;
        fired
    }
}

impl Actor for Executor {
    fn label(&self) -> &str {
        &self.label
    }

    fn local_time(&self) -> SimTime {
        self.local_time
    }

    /// The next completion event, clamped to the requested horizon.
    fn peek(&self, end: SimTime) -> SimTime {
        match self.running.peek() {
            Some(&Reverse(completion)) => end.min(completion),
            None                       => end,
        }
    }

    fn dump(&self) -> ActorSnapshot {
        ActorSnapshot {
            time:     self.local_time,
            id:       self.label.clone(),
            pending:  self.pending.len(),
            running:  self.running.len(),
            capacity: Some(self.capacity),
        }
    }
}
