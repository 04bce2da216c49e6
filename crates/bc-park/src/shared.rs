//! Everything the actors share, bundled behind one `Arc`.

use bc_core::ParkConfig;
use bc_sync::{Countdown, GateSet, RideStartBarrier, Shutdown, WaitingLine};
use log::info;

use crate::{Journal, ParkBoard, ParkSnapshot};

pub(crate) struct Shared {
    pub countdown:   Countdown,
    pub line:        WaitingLine,
    pub seat_gates:  GateSet,
    pub end_gates:   GateSet,
    pub start:       RideStartBarrier,
    pub shutdown:    Shutdown,
    pub board:       ParkBoard,
    pub journal:     Journal,
}

impl Shared {
    pub fn new(config: &ParkConfig) -> Self {
        Self {
            countdown:  Countdown::new(config.ride_quota),
            line:       WaitingLine::new(config.line_capacity()),
            seat_gates: GateSet::new("seat gate", config.riders),
            end_gates:  GateSet::new("ride-end gate", config.riders),
            start:      RideStartBarrier::new(),
            shutdown:   Shutdown::new(),
            board:      ParkBoard::new(config.riders, config.cars),
            journal:    Journal::new(config.record_events),
        }
    }

    /// Request shutdown and wake every actor parked at a safe point.
    ///
    /// Idempotent; every car calls it on its way out.
    pub fn close(&self) {
        if !self.shutdown.request() {
            return;
        }
        info!(
            "park closing with {} of {} rides remaining",
            self.countdown.remaining(),
            self.countdown.quota()
        );
        self.countdown.close();
        self.line.interrupt();
        self.seat_gates.interrupt();
        self.end_gates.interrupt();
        self.start.interrupt();
    }

    pub fn snapshot(&self) -> ParkSnapshot {
        ParkSnapshot {
            elapsed:         self.journal.elapsed(),
            rides_remaining: self.countdown.remaining(),
            cars:            self.board.occupants(),
            riders:          self.board.rider_states(),
            line_len:        self.line.len(),
        }
    }
}

/// Closes the park if the owning actor thread unwinds, so a panic in one
/// actor cannot leave the others and the observer loop waiting forever.
pub(crate) struct CloseOnPanic<'a>(pub &'a Shared);

impl Drop for CloseOnPanic<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.close();
        }
    }
}
