//! `ds-core` — foundational types for the `dispatchsim` framework.
//!
//! This crate is a dependency of every other `ds-*` crate.  It intentionally
//! has no `ds-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                     |
//! |-----------|----------------------------------------------|
//! | [`ids`]   | `ExecutorId`                                 |
//! | [`time`]  | `SimTime`, `SimConfig`                       |
//! | [`rng`]   | `WorkloadRng` (seeded queue-content source)  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::ExecutorId;
pub use rng::WorkloadRng;
pub use time::{SimConfig, SimTime};
