//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ds_actor::ActorSnapshot;
use ds_core::SimTime;
use ds_sim::SimObserver;

use crate::row::StepSummaryRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams actor snapshots and round summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_actor_snapshot(&mut self, snapshot: &ActorSnapshot) {
        let result = self.writer.write_snapshot(snapshot);
        self.store_err(result);
    }

    fn on_step_end(&mut self, time: SimTime, assigned: usize, completed: usize) {
        let row = StepSummaryRow {
            time:      time.0,
            assigned:  assigned as u64,
            completed: completed as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
