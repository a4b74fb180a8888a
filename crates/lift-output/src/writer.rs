//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult, RunSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never reach the elevator: [`OutputObserver`][crate::OutputObserver]
/// keeps the first one for [`take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of event rows.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write one run summary row.
    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
