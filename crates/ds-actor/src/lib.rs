//! `ds-actor` — the two actor state machines of the dispatch simulation.
//!
//! An *actor* is anything with its own local clock that the driver can
//! advance.  There are exactly two variants:
//!
//! - [`Executor`] — a bounded-concurrency worker draining tasks from its own
//!   FIFO pending queue into a fixed number of running slots.
//! - [`Scheduler`] — the dispatcher that routes its backlog onto executor
//!   pending queues by greedy cost minimization.
//!
//! # The capability set
//!
//! Both variants expose `{forward, peek, dump}`:
//!
//! | Operation         | Meaning                                             |
//! |-------------------|-----------------------------------------------------|
//! | `forward(end)`    | Advance local state up to exactly `end`.            |
//! | `peek(end)`       | Earliest time ≤ `end` at which state would change.  |
//! | `dump()`          | Read-only [`ActorSnapshot`] of current state.       |
//!
//! The read-only half lives on the [`Actor`] trait.  `forward` is inherent on
//! each type: the scheduler's advance needs exclusive access to the executor
//! arena (`&mut [Executor]`), the executor's does not, and flattening that
//! difference behind one signature would hand the scheduler aliased access to
//! state it must never touch.
//!
//! # Ownership contract
//!
//! The scheduler owns no executor references.  Each `forward` call borrows
//! the arena from the driver, and the only mutation the scheduler performs is
//! [`Executor::enqueue`] — appending to a pending queue.  Running sets are
//! unreachable from scheduler code by construction.

pub mod actor;
pub mod executor;
pub mod scheduler;


pub use actor::{Actor, ActorSnapshot};
pub use executor::Executor;
pub use scheduler::{DEFAULT_SATURATION_THRESHOLD, Scheduler};
