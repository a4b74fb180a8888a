//! Plain data row types written by output backends.

/// One observer callback.
///
/// `run` counts runs from 1 for events inside a run, and is 0 for events
/// outside any run: a same-floor call opening the doors before the first run
/// or between two runs.  `seq` numbers events across the whole recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub run:        u32,
    pub seq:        u64,
    /// `LiftEvent::kind` tag, e.g. `"moved"`.
    pub kind:       &'static str,
    /// `"up"` / `"down"` for sweep rows, empty otherwise.
    pub direction:  &'static str,
    /// Car floor before the event.
    pub from_floor: i32,
    /// Car floor after the event; for a sweep row, its last stop.
    pub to_floor:   i32,
}

/// Totals for one `run` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub run:         u32,
    pub start_floor: i32,
    pub final_floor: i32,
    pub stops:       u32,
    pub sweeps:      u32,
    pub distance:    u32,
}
