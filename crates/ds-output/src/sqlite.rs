//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `actor_snapshots` and `step_summaries`.

use std::path::Path;

use ds_actor::ActorSnapshot;
use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS actor_snapshots (
                 id       TEXT    NOT NULL,
                 time     INTEGER NOT NULL,
                 pending  INTEGER NOT NULL,
                 running  INTEGER NOT NULL,
                 capacity INTEGER
             );
             CREATE TABLE IF NOT EXISTS step_summaries (
                 time      INTEGER PRIMARY KEY,
                 assigned  INTEGER NOT NULL,
                 completed INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshot(&mut self, snapshot: &ActorSnapshot) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO actor_snapshots (id, time, pending, running, capacity) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(rusqlite::params![
            snapshot.id,
            snapshot.time.0,
            snapshot.pending as u64,
            snapshot.running as u64,
            snapshot.capacity,
        ])?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO step_summaries (time, assigned, completed) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![row.time, row.assigned, row.completed],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
