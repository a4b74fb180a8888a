//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `run_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, RunSummaryRow};

pub const EVENT_HEADER: [&str; 6] = ["run", "seq", "kind", "direction", "from_floor", "to_floor"];
pub const SUMMARY_HEADER: [&str; 6] = ["run", "start_floor", "final_floor", "stops", "sweeps", "distance"];

/// Writes elevator events and run summaries to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (truncating existing ones) and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("run_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { events, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.run.to_string(),
                row.seq.to_string(),
                row.kind.to_owned(),
                row.direction.to_owned(),
                row.from_floor.to_string(),
                row.to_floor.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.run.to_string(),
            row.start_floor.to_string(),
            row.final_floor.to_string(),
            row.stops.to_string(),
            row.sweeps.to_string(),
            row.distance.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
