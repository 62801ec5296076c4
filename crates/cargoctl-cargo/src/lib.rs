//! `cargoctl-cargo` — cargo, cargo-edge types, cargo-edge construction, and
//! the CSV scenario loader.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|--------------------------------------------------------------|
//! | [`types`]   | `Cargo`, `CargoEdge`                                         |
//! | [`builder`] | `build_cargo_edges` — cargo-edge construction (C3)            |
//! | [`loader`]  | `load_routes_csv`, `load_cargo_csv`, `load_planes_csv` (C12)  |
//! | [`error`]   | `CargoError`, `CargoResult<T>`                                |
//!
//! # Window model (summary)
//!
//! A cargo's shortest path by cost over the union multigraph is split into
//! one `CargoEdge` per hop. Earliest-pickup windows sweep forward from the
//! cargo's `earliest_pickup_time`; latest-pickup windows sweep backward from
//! its `soft_deadline`. Both sweeps add/subtract `duration = travel_time +
//! 2 * processing_time` per hop.

pub mod builder;
pub mod error;
pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::build_cargo_edges;
pub use error::{CargoError, CargoResult};
pub use loader::{load_cargo_csv, load_cargo_reader, load_planes_csv, load_planes_reader, load_routes_csv, load_routes_reader, PlaneSpec};
pub use types::{Cargo, CargoEdge};
