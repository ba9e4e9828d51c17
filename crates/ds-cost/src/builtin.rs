//! Built-in cost functions.
//!
//! Both normalize load by capacity so a large executor with many running
//! tasks can still undercut a small idle one.  They differ in how running
//! and pending load combine:
//!
//! - [`LinearCost`]: `x/c + q/c` — additive; utilization and backlog weigh
//!   equally.
//! - [`ExponentialCost`]: `(x/c) * (q/c)` — multiplicative; an executor needs
//!   *both* high utilization and a backlog to score badly, and one that is
//!   idle on either axis scores zero.

use std::fmt;
use std::str::FromStr;

use crate::{CostError, CostModel};

// ── Built-in models ───────────────────────────────────────────────────────────

/// Additive load cost: `running/capacity + pending/capacity`.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearCost;

impl CostModel for LinearCost {
    #[inline]
    fn cost(&self, capacity: u32, running: usize, pending: usize) -> f64 {
        let c = f64::from(capacity);
        running as f64 / c + pending as f64 / c
    }
}

/// Multiplicative load cost: `(running/capacity) * (pending/capacity)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExponentialCost;

impl CostModel for ExponentialCost {
    #[inline]
    fn cost(&self, capacity: u32, running: usize, pending: usize) -> f64 {
        let c = f64::from(capacity);
        (running as f64 / c) * (pending as f64 / c)
    }
}

// ── By-name selection ─────────────────────────────────────────────────────────

/// A built-in cost model selected by name, for configuration surfaces that
/// carry the choice as a string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CostKind {
    Linear,
    Exponential,
}

impl CostKind {
    pub fn name(self) -> &'static str {
        match self {
            CostKind::Linear      => "linear",
            CostKind::Exponential => "exponential",
        }
    }
}

impl CostModel for CostKind {
    #[inline]
    fn cost(&self, capacity: u32, running: usize, pending: usize) -> f64 {
        match self {
            CostKind::Linear      => LinearCost.cost(capacity, running, pending),
            CostKind::Exponential => ExponentialCost.cost(capacity, running, pending),
        }
    }
}

impl FromStr for CostKind {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear"      => Ok(CostKind::Linear),
            "exponential" => Ok(CostKind::Exponential),
            other         => Err(CostError::UnknownModel(other.to_owned())),
        }
    }
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
