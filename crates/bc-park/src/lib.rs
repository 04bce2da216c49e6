//! `bc-park` — rider and car actors for the bumper-car park.
//!
//! # Protocol
//!
//! Every rider and every car is its own thread.  One ride is a fixed
//! handshake between exactly one rider and one car:
//!
//! ```text
//! rider                                car
//! wander (random delay)                claim a ride from the countdown
//! enqueue in the waiting line   ──→    take the head of the line, seat it
//! wait on own seat gate         ←──    open the rider's seat gate
//! signal the start barrier      ──→    consume one start signal
//!                                      bump around (random delay)
//! wait on own ride-end gate     ←──    clear the seat, open ride-end gate
//! back to wandering                    decrement the countdown
//! ```
//!
//! The park closes once the countdown reaches zero: the last car out
//! requests shutdown, which wakes every rider still wandering or waiting.
//!
//! # Observing a run
//!
//! [`Park::run`] drives a [`ParkObserver`] on the calling thread with
//! periodic [`ParkSnapshot`]s and a final [`RunSummary`].  With
//! `ParkConfig::record_events` the summary also carries the full
//! [`Journal`] of protocol steps.
//!
//! # Cargo features
//!
//! | Feature | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` for `ParkConfig`.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bc_core::ParkConfig;
//! use bc_pacing::RandomPacing;
//! use bc_park::{NoopObserver, ParkBuilder};
//!
//! let config = ParkConfig::default();
//! let pacing = RandomPacing::from_config(&config);
//! let summary = ParkBuilder::new(config, pacing).build()?.run(&mut NoopObserver)?;
//! assert_eq!(summary.rides_remaining, 0);
//! ```

pub mod board;
pub mod builder;
pub mod error;
pub mod journal;
pub mod observer;
pub mod park;

mod car;
mod rider;
mod shared;

#[cfg(test)]
mod tests;

pub use board::{ParkBoard, RiderState};
pub use builder::ParkBuilder;
pub use error::{ParkError, ParkResult};
pub use journal::{Journal, JournalEntry, ParkEvent};
pub use observer::{NoopObserver, ParkObserver, ParkSnapshot, RunSummary};
pub use park::Park;
