//! The `OutputWriter` trait implemented by all backend writers.

use ds_actor::ActorSnapshot;

use crate::{OutputResult, StepSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are propagated to [`SimOutputObserver`][crate::SimOutputObserver],
/// which stores the first one for retrieval after the run.
pub trait OutputWriter {
    /// Write one per-actor snapshot row.
    fn write_snapshot(&mut self, snapshot: &ActorSnapshot) -> OutputResult<()>;

    /// Write one per-round summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
