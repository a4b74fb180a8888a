//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `events.db` file in the configured output directory with
//! two tables: `events` and `run_summaries`.  Both tables are emptied on open,
//! matching the CSV backend, which truncates its files.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, RunSummaryRow};

/// Writes elevator output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `events.db` in `dir`, initialise the schema and clear
    /// rows left by an earlier recording.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("events.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 run        INTEGER NOT NULL,
                 seq        INTEGER NOT NULL,
                 kind       TEXT    NOT NULL,
                 direction  TEXT    NOT NULL,
                 from_floor INTEGER NOT NULL,
                 to_floor   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summaries (
                 run         INTEGER PRIMARY KEY,
                 start_floor INTEGER NOT NULL,
                 final_floor INTEGER NOT NULL,
                 stops       INTEGER NOT NULL,
                 sweeps      INTEGER NOT NULL,
                 distance    INTEGER NOT NULL
             );
             DELETE FROM events;
             DELETE FROM run_summaries;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (run, seq, kind, direction, from_floor, to_floor) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run,
                    row.seq as i64,
                    row.kind,
                    row.direction,
                    row.from_floor,
                    row.to_floor,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summaries (run, start_floor, final_floor, stops, sweeps, distance) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![row.run, row.start_floor, row.final_floor, row.stops, row.sweeps, row.distance],
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
