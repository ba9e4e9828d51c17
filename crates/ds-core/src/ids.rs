//! Strongly typed executor identifier.
//!
//! The scheduler never holds references to executors — it works with indices
//! into the driver-owned executor arena.  `ExecutorId` is that index, wrapped
//! so it cannot be confused with a task duration or a queue length.  The inner
//! integer is `pub` for direct `Vec` indexing via `id.index()`.

use std::fmt;

/// Index of an executor in the driver's arena.  Max ~4.3 billion executors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutorId(pub u32);

impl ExecutorId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ExecutorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl From<ExecutorId> for usize {
    #[inline(always)]
    fn from(id: ExecutorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ExecutorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ExecutorId, Self::Error> {
        u32::try_from(n).map(ExecutorId)
    }
}
