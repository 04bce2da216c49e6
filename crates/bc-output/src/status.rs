//! `StatusPrinter` — the park's text status board.

use std::io::{self, Stdout, Write};

use bc_park::{ParkObserver, ParkSnapshot, RiderState, RunSummary};

/// A [`ParkObserver`] that prints every snapshot as a status board:
///
/// ```text
/// The current situation in the park is:
/// There are 7 rides left
/// Car 1 is running. The rider is 4
/// Car 2 is not running.
/// Rider 1 is wandering
/// Rider 4 is in a car.
/// Rider 5 is waiting in line
/// ```
///
/// The first write error is kept and all later output dropped; retrieve it
/// with [`take_error`][Self::take_error].
pub struct StatusPrinter<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl StatusPrinter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = f(&mut self.out).and_then(|()| self.out.flush()) {
            self.last_error = Some(e);
        }
    }
}

fn write_board(out: &mut impl Write, snapshot: &ParkSnapshot) -> io::Result<()> {
    writeln!(out, "The current situation in the park is:")?;
    writeln!(out, "There are {} rides left", snapshot.rides_remaining)?;
    for (i, rider) in snapshot.cars.iter().enumerate() {
        match rider {
            Some(r) => writeln!(out, "Car {} is running. The rider is {}", i + 1, u32::from(*r))?,
            None => writeln!(out, "Car {} is not running.", i + 1)?,
        }
    }
    for (rider, state) in snapshot.rider_states() {
        let doing = match state {
            RiderState::Wandering => "is wandering",
            RiderState::Waiting   => "is waiting in line",
            RiderState::Riding    => "is in a car.",
        };
        writeln!(out, "Rider {} {doing}", u32::from(rider))?;
    }
    writeln!(out)
}

impl<W: Write> ParkObserver for StatusPrinter<W> {
    fn on_report(&mut self, snapshot: &ParkSnapshot) {
        self.print(|out| write_board(out, snapshot));
    }

    fn on_finish(&mut self, snapshot: &ParkSnapshot, summary: &RunSummary) {
        self.print(|out| {
            write_board(out, snapshot)?;
            writeln!(
                out,
                "The park is closed: {} of {} rides in {:.2?}",
                summary.rides_completed, summary.quota, summary.elapsed
            )
        });
    }
}
