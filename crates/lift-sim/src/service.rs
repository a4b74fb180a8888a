//! Single-writer elevator service.
//!
//! The elevator lives on its own thread and is driven by a command channel.
//! Commands from every [`ElevatorHandle`] are applied strictly in the order
//! they reach the channel, so each sweep snapshot is taken from a consistent
//! queue state.
//!
//! ```text
//! handle.submit_call ─┐
//! handle.run ─────────┼─▶ commands ─▶ [service thread: Elevator<O>] ─▶ events
//! handle.snapshot ────┘
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{JoinHandle, spawn};

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use lift_core::{CallRequest, Direction, Floor, LiftConfig, LiftResult};
use lift_dispatch::Placement;
use tracing::debug;

use crate::{Cabin, Elevator, ElevatorBuilder, LiftEvent, LiftObserver, RunReport, SimError, SimResult};

// ── Commands ──────────────────────────────────────────────────────────────────

enum Command {
    SubmitCall(CallRequest, Sender<LiftResult<Placement>>),
    SubmitDestination(Floor, Sender<LiftResult<Placement>>),
    Run(Sender<RunReport>),
    Snapshot(Sender<ElevatorSnapshot>),
    Reset(Sender<()>),
    Shutdown,
}

/// Point-in-time copy of the service's elevator state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub floor:     Floor,
    pub direction: Direction,
    pub up:        Vec<Floor>,
    pub down:      Vec<Floor>,
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Move `elevator` onto a service thread.
///
/// The thread exits after [`ElevatorHandle::shutdown`] or once every handle
/// is dropped, and hands the elevator back through the `JoinHandle`.
pub fn spawn_service<O>(elevator: Elevator<O>) -> (ElevatorHandle, JoinHandle<Elevator<O>>)
where
    O: LiftObserver + Send + 'static,
{
    let (commands_tx, commands_rx) = unbounded();
    let join = spawn(move || serve(elevator, commands_rx));
    let handle = ElevatorHandle {
        commands: commands_tx,
        draining: Arc::new(AtomicBool::new(false)),
    };
    (handle, join)
}

/// Build an elevator from `config` whose events are published on the
/// returned receiver, and spawn it as a service.
pub fn spawn_with_events(
    config: LiftConfig,
) -> SimResult<(ElevatorHandle, Receiver<LiftEvent>, JoinHandle<Elevator<ChannelObserver>>)> {
    let (events_tx, events_rx) = unbounded();
    let elevator = ElevatorBuilder::new(config)
        .observer(ChannelObserver::new(events_tx))
        .build()?;
    let (handle, join) = spawn_service(elevator);
    Ok((handle, events_rx, join))
}

fn serve<O: LiftObserver>(mut elevator: Elevator<O>, commands: Receiver<Command>) -> Elevator<O> {
    debug!("elevator service started");
    // Reply send errors mean the caller gave up waiting; nothing to do.
    for command in commands.iter() {
        match command {
            Command::SubmitCall(request, reply) => {
                let _ = reply.send(elevator.submit_call(request));
            }
            Command::SubmitDestination(floor, reply) => {
                let _ = reply.send(elevator.submit_destination(floor));
            }
            Command::Run(reply) => {
                let _ = reply.send(elevator.run());
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(ElevatorSnapshot {
                    floor:     elevator.current_floor(),
                    direction: elevator.current_direction(),
                    up:        elevator.up_queue().to_vec(),
                    down:      elevator.down_queue().to_vec(),
                });
            }
            Command::Reset(reply) => {
                elevator.reset();
                let _ = reply.send(());
            }
            Command::Shutdown => break,
        }
    }
    debug!("elevator service stopped");
    elevator
}

// ── ElevatorHandle ────────────────────────────────────────────────────────────

/// Cloneable client for a service-hosted elevator.
///
/// Every method blocks until the service thread has applied the command.
#[derive(Clone)]
pub struct ElevatorHandle {
    commands: Sender<Command>,
    /// Set while a `run` issued through any clone is in flight.
    draining: Arc<AtomicBool>,
}

impl ElevatorHandle {
    fn request<T>(&self, make: impl FnOnce(Sender<T>) -> Command) -> SimResult<T> {
        let (reply_tx, reply_rx) = bounded(1);
        self.commands
            .send(make(reply_tx))
            .map_err(|_| SimError::ServiceStopped)?;
        reply_rx.recv().map_err(|_| SimError::ServiceStopped)
    }

    pub fn submit_call(&self, request: CallRequest) -> SimResult<Placement> {
        Ok(self.request(|reply| Command::SubmitCall(request, reply))??)
    }

    pub fn submit_destination(&self, floor: impl Into<Floor>) -> SimResult<Placement> {
        let floor = floor.into();
        Ok(self.request(|reply| Command::SubmitDestination(floor, reply))??)
    }

    /// Drain the elevator's queues.
    ///
    /// Fails with [`SimError::AlreadyRunning`] if another caller's drain has
    /// not returned yet.  Submissions sent meanwhile are applied after it.
    pub fn run(&self) -> SimResult<RunReport> {
        if self.draining.swap(true, Ordering::AcqRel) {
            return Err(SimError::AlreadyRunning);
        }
        let result = self.request(Command::Run);
        self.draining.store(false, Ordering::Release);
        result
    }

    pub fn snapshot(&self) -> SimResult<ElevatorSnapshot> {
        self.request(Command::Snapshot)
    }

    pub fn reset(&self) -> SimResult<()> {
        self.request(Command::Reset)
    }

    /// Ask the service thread to exit after the commands already queued.
    pub fn shutdown(&self) -> SimResult<()> {
        self.commands
            .send(Command::Shutdown)
            .map_err(|_| SimError::ServiceStopped)
    }
}

// ── ChannelObserver ───────────────────────────────────────────────────────────

/// A [`LiftObserver`] that forwards every callback as a [`LiftEvent`].
///
/// Events are dropped once the receiver is gone.
pub struct ChannelObserver {
    tx: Sender<LiftEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<LiftEvent>) -> Self {
        Self { tx }
    }

    fn emit(&self, event: LiftEvent) {
        let _ = self.tx.send(event);
    }
}

impl LiftObserver for ChannelObserver {
    fn on_run_start(&mut self, floor: Floor) {
        self.emit(LiftEvent::RunStarted { floor });
    }

    fn on_sweep_start(&mut self, direction: Direction, stops: &[Floor]) {
        self.emit(LiftEvent::SweepStarted { direction, stops: stops.to_vec() });
    }

    fn on_move(&mut self, from: Floor, to: Floor) {
        self.emit(LiftEvent::Moved { from, to });
    }

    fn on_door_open(&mut self, floor: Floor, _cabin: &mut Cabin<'_>) {
        self.emit(LiftEvent::DoorOpened { floor });
    }

    fn on_idle(&mut self, floor: Floor) {
        self.emit(LiftEvent::Idle { floor });
    }
}
