//! `bc-output` — status display and file output for park runs.
//!
//! | Type                   | Output                                               |
//! |------------------------|------------------------------------------------------|
//! | [`StatusPrinter`]      | The classic text status board, on any `io::Write`   |
//! | [`CsvWriter`]          | `occupancy_snapshots.csv`, `ride_events.csv`         |
//!
//! File backends implement [`OutputWriter`] and are driven by
//! [`ParkOutputObserver`], which implements `bc_park::ParkObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bc_output::{CsvWriter, ParkOutputObserver, StatusPrinter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = (StatusPrinter::stdout(), ParkOutputObserver::new(writer));
//! park.run(&mut obs)?;
//! obs.1.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod status;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ParkOutputObserver;
pub use row::{OccupancySnapshotRow, RideEventRow};
pub use status::StatusPrinter;
pub use writer::OutputWriter;
