//! `ds-cost` — cost functions ranking executors for task assignment.
//!
//! The scheduler picks the executor with the lowest cost for every task it
//! dispatches.  A cost function sees only an executor's load triple
//! `(capacity, running, pending)` and must be pure: same triple, same score.
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`model`]   | `CostModel` trait, configuration-time `validate`  |
//! | [`builtin`] | `LinearCost`, `ExponentialCost`, `CostKind`       |
//! | [`error`]   | `CostError`, `CostResult<T>`                      |

pub mod builtin;
pub mod error;
pub mod model;


pub use builtin::{CostKind, ExponentialCost, LinearCost};
pub use error::{CostError, CostResult};
pub use model::{CostModel, validate};
