//! `cargoctl-dispatch` — action types, the cargo-plan/assignment registries,
//! sub-path extraction, the priority policy, and the per-tick dispatcher FSM.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|----------------------------------------------------------------|
//! | [`action`]   | `Action` — the per-tick decision an aircraft can emit            |
//! | [`registry`] | `CargoPlan`, `AgentAssignment`, `FreePool` (C7, C8)               |
//! | [`subpath`]  | `extract_assigned_path` — group-bounded path prefix (C7, C8)     |
//! | [`priority`] | `action_priority` (C11)                                          |
//! | [`fsm`]      | `dispatch_waiting`, `dispatch_ready_for_takeoff` (C9)            |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                              |
//!
//! # Tick loop
//!
//! For each aircraft, the controller observes its `DispatchState` and calls
//! either [`fsm::dispatch_waiting`] or [`fsm::dispatch_ready_for_takeoff`];
//! `Moving`/`Processing` aircraft are skipped entirely (no-op by
//! construction). Outage-aware rerouting consults [`cargoctl_graph::OfflineEdges`]
//! already ingested by the controller this tick.

pub mod action;
pub mod error;
pub mod fsm;
pub mod priority;
pub mod registry;
pub mod subpath;


pub use action::Action;
pub use error::{DispatchError, DispatchResult};
pub use fsm::{dispatch_ready_for_takeoff, dispatch_waiting, DispatchState};
pub use priority::action_priority;
pub use registry::{AgentAssignment, Assignment, CargoPlan, FreePool};
pub use subpath::extract_assigned_path;
