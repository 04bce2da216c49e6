//! `bc-core` — foundational types for the bumper-car park simulation.
//!
//! This crate is a dependency of every other `bc-*` crate.  It has no `bc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `RiderId`, `CarId`                                    |
//! | [`config`]  | `ParkConfig`                                          |
//! | [`rng`]     | `ActorRng` (per-actor), `ActorKind`                   |
//! | [`error`]   | `BcError`, `BcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ParkConfig;
pub use error::{BcError, BcResult};
pub use ids::{CarId, RiderId};
pub use rng::{ActorKind, ActorRng};
