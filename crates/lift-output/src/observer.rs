//! `OutputObserver<W>` — bridges `LiftObserver` to an `OutputWriter`.

use lift_core::{Direction, Floor};
use lift_sim::{Cabin, LiftObserver};
use tracing::warn;

use crate::row::{EventRow, RunSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Running totals for the run in progress.
struct RunTotals {
    start:    Floor,
    stops:    u32,
    sweeps:   u32,
    distance: u32,
}

/// A [`LiftObserver`] that records every event and one summary per run to
/// any [`OutputWriter`] backend.
///
/// Event rows are buffered and written when a run ends.  Errors from the
/// writer are stored because observer callbacks have no return value; call
/// [`finish`][Self::finish] when done to flush and surface the first one.
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    run:        u32,
    seq:        u64,
    floor:      Option<Floor>,
    totals:     Option<RunTotals>,
    pending:    Vec<EventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            run:        0,
            seq:        0,
            floor:      None,
            totals:     None,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Number of runs started so far.
    pub fn runs(&self) -> u32 {
        self.run
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write buffered events, finish the writer, and return the first error
    /// seen since the last `take_error`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.flush_events();
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(&mut self, kind: &'static str, direction: Direction, from: Floor, to: Floor) {
        self.seq += 1;
        let direction = if direction.is_moving() { direction.as_str() } else { "" };
        // Rows between runs (same-floor calls) belong to no run.
        let run = if self.totals.is_some() { self.run } else { 0 };
        self.pending.push(EventRow {
            run,
            seq: self.seq,
            kind,
            direction,
            from_floor: from.number(),
            to_floor: to.number(),
        });
        self.floor = Some(to);
    }

    fn flush_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> LiftObserver for OutputObserver<W> {
    fn on_run_start(&mut self, floor: Floor) {
        self.run += 1;
        self.totals = Some(RunTotals { start: floor, stops: 0, sweeps: 0, distance: 0 });
        self.push("run_started", Direction::Idle, floor, floor);
    }

    fn on_sweep_start(&mut self, direction: Direction, stops: &[Floor]) {
        if let Some(t) = self.totals.as_mut() {
            t.sweeps += 1;
        }
        let from = self.floor.unwrap_or_default();
        let to = stops.last().copied().unwrap_or(from);
        // A sweep row does not move the car.
        self.push("sweep_started", direction, from, to);
        self.floor = Some(from);
    }

    fn on_move(&mut self, from: Floor, to: Floor) {
        if let Some(t) = self.totals.as_mut() {
            t.distance += from.distance(to);
        }
        self.push("moved", Direction::Idle, from, to);
    }

    fn on_door_open(&mut self, floor: Floor, _cabin: &mut Cabin<'_>) {
        if let Some(t) = self.totals.as_mut() {
            t.stops += 1;
        }
        self.push("door_opened", Direction::Idle, floor, floor);
    }

    fn on_idle(&mut self, floor: Floor) {
        self.push("idle", Direction::Idle, floor, floor);
        self.flush_events();
        if let Some(t) = self.totals.take() {
            let row = RunSummaryRow {
                run:         self.run,
                start_floor: t.start.number(),
                final_floor: floor.number(),
                stops:       t.stops,
                sweeps:      t.sweeps,
                distance:    t.distance,
            };
            let result = self.writer.write_run_summary(&row);
            self.store_err(result);
        }
    }
}
