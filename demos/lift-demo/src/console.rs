//! Console reporting.

use lift_core::Floor;
use lift_output::{CsvWriter, OutputObserver};
use lift_sim::{Cabin, ChainedObserver, LiftEvent, LiftObserver};

/// Prints movement, door and idle events, one line each.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConsoleObserver;

impl LiftObserver for ConsoleObserver {
    fn on_move(&mut self, from: Floor, to: Floor) {
        println!("{}", LiftEvent::Moved { from, to });
    }

    fn on_door_open(&mut self, floor: Floor, _cabin: &mut Cabin<'_>) {
        println!("{}", LiftEvent::DoorOpened { floor });
    }

    fn on_idle(&mut self, floor: Floor) {
        println!("{}", LiftEvent::Idle { floor });
    }
}

/// Console output plus an optional CSV recording.
pub type DemoObserver = ChainedObserver<ConsoleObserver, Option<OutputObserver<CsvWriter>>>;

/// `"6, 4"`, or `"-"` when empty.
pub fn stop_list(stops: &[Floor]) -> String {
    if stops.is_empty() {
        return "-".to_owned();
    }
    stops
        .iter()
        .map(|f| f.number().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
