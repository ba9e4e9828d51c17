//! `ds-sim` — the driver synchronizing all actors to one global clock.
//!
//! # The driver round
//!
//! ```text
//! while current_time < end_time:
//!   ① Peek     — next_time = min(end_time, every actor's peek(end_time))
//!   ② Advance  — in declared order (scheduler first, then executors):
//!                  snapshot the actor, then forward it to next_time
//!   ③ Commit   — current_time = next_time
//! ```
//!
//! Time moves in event-driven jumps: the peek round finds the earliest
//! completion any executor will fire, and every actor is advanced to exactly
//! that instant before the next round begins.  Executors and the scheduler
//! have different event granularities, but between rounds every local clock
//! equals the global one.
//!
//! Snapshots are captured immediately before each actor's own `forward`, so
//! a snapshot shows that actor's state at the start of the interval.  Because
//! the scheduler advances first, executor snapshots within a round already
//! include the tasks dispatched to them in that round.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ds_core::{SimConfig, SimTime};
//! use ds_cost::LinearCost;
//! use ds_sim::{ExecutorSpec, NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(SimTime(0), SimTime(500));
//! let mut sim = SimBuilder::new(config, LinearCost)
//!     .scheduler("SCHD", backlog)
//!     .executor(ExecutorSpec::new("HPC1", 20))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```
//!
//! The simulation is strictly single-threaded and deterministic; mutating
//! actor state between driver rounds from outside is unsupported.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::{ExecutorSpec, SimBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
