//! `cargoctl-plan` — strategic planning: plane/leg state, the assignment
//! engine, and the window propagator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|-----------------------------------------------------------|
//! | [`types`]     | `Plane`, `Leg` (C4)                                       |
//! | [`store`]     | `PlaneStore` — per-plane state + `ce_plane_map`            |
//! | [`assign`]    | `plan_all` — assignment engine (C5)                       |
//! | [`propagate`] | `propagate` — window propagator (C6)                      |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                               |
//!
//! # Pipeline
//!
//! `cargoctl-cargo::build_cargo_edges` turns each cargo into an ordered list
//! of cargo edges. `assign::plan_all` then processes every pending edge
//! (sorted into coarse time buckets), committing each to the best-matching
//! plane and letting `propagate::propagate` push the resulting window shift
//! onto the rest of the plan.

pub mod assign;
pub mod error;
pub mod propagate;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use assign::{plan_all, ASSIGNMENT_BUCKET};
pub use error::{PlanError, PlanResult};
pub use propagate::{propagate, WindowDiffs};
pub use store::PlaneStore;
pub use types::{Leg, Plane};
