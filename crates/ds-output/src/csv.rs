//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `actor_snapshots.csv` — one row per actor per driver round
//! - `step_summaries.csv` — one row per driver round

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ds_actor::ActorSnapshot;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("actor_snapshots.csv"))?;
        snapshots.write_record(["id", "time", "pending", "running", "capacity"])?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(["time", "assigned", "completed"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, snapshot: &ActorSnapshot) -> OutputResult<()> {
        // The scheduler has no capacity; its cell stays empty.
        let capacity = snapshot.capacity.map_or(String::new(), |c| c.to_string());
        self.snapshots.write_record(&[
            snapshot.id.clone(),
            snapshot.time.0.to_string(),
            snapshot.pending.to_string(),
            snapshot.running.to_string(),
            capacity,
        ])?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.time.to_string(),
            row.assigned.to_string(),
            row.completed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
