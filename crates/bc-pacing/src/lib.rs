//! `bc-pacing` — how long riders wander and cars bump.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`pacing`] | `Pacing` trait                                            |
//! | [`random`] | `RandomPacing` — uniform draws below configured bounds    |
//! | [`none`]   | `NoPacing` — zero delays, for tests                       |
//!
//! # Design notes
//!
//! Delays carry no synchronization meaning.  Actors ask the pacing model for
//! a `Duration` and sleep it themselves, so swapping [`RandomPacing`] for
//! [`NoPacing`] changes timing only, never the protocol.

pub mod none;
pub mod pacing;
pub mod random;


pub use none::NoPacing;
pub use pacing::Pacing;
pub use random::RandomPacing;
