//! `cargoctl-core` — foundational types for the `cargoctl` routing controller.
//!
//! This crate is a dependency of every other `cargoctl-*` crate. It
//! intentionally has no `cargoctl-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                               |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `AirportId`, `PlaneTypeId`, `PlaneId`, `CargoId`, `GroupId` |
//! | [`time`]        | `Tick`, `BIG_TIME`                                     |
//! | [`constants`]   | `TW_OVERLAP_MARGIN`, overlap predicate, priority bands |
//! | [`error`]       | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod constants;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use constants::{tw_overlap, PriorityBand, TW_OVERLAP_MARGIN};
pub use error::{CoreError, CoreResult};
pub use ids::{AirportId, CargoId, GroupId, PlaneId, PlaneTypeId, NO_AIRPORT};
pub use time::{Tick, BIG_TIME};
