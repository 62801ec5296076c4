//! Typed boundary records (§6): the process-boundary shape of `Observation`,
//! `Info`, and the outgoing `ActionOut`.
//!
//! These are what a conforming caller hands to [`crate::Controller::reset`]
//! and [`crate::Controller::policies`] instead of free-form maps. Validation
//! against the controller's known agent set happens once, at the start of
//! each call — see [`crate::controller::Controller`].

use std::collections::BTreeMap;

use cargoctl_core::{AirportId, CargoId, PlaneId, PlaneTypeId};
use cargoctl_dispatch::DispatchState;

use cargoctl_cargo::Cargo;

/// One directed, per-plane-type route edge as reported by the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEdge {
    pub plane_type: PlaneTypeId,
    pub from: AirportId,
    pub to: AirportId,
    pub cost: u32,
    pub time: u32,
}

/// Episode-wide scalar settings; only `processing_time` is read by this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioInfo {
    pub processing_time: u64,
}

/// Global, shared state visible to every agent this tick.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    pub route_map: Vec<RouteEdge>,
    pub active_cargo: Vec<Cargo>,
    pub event_new_cargo: Vec<Cargo>,
    pub scenario_info: Vec<ScenarioInfo>,
}

/// Per-aircraft observed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentObservation {
    pub state: DispatchState,
    pub current_airport: AirportId,
    pub destination: AirportId,
    pub plane_type: PlaneTypeId,
    pub max_weight: u32,
    pub current_weight: u32,
    pub cargo_at_current_airport: bool,
    pub cargo_onboard: bool,
}

/// One tick's full observation. Agents are keyed in a `BTreeMap` so the
/// per-tick iteration order is deterministic (§5: "aircraft are iterated in
/// the observation's key order").
#[derive(Debug, Clone, Default)]
pub struct Observation {
    pub global: GlobalState,
    pub agents: BTreeMap<PlaneId, AgentObservation>,
}

/// The outgoing per-agent action record. `destination = NO_AIRPORT` means
/// "do not take off this tick"; `priority = None` is valid for no-op ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOut {
    pub priority: Option<u32>,
    pub cargo_to_load: Option<CargoId>,
    pub cargo_to_unload: Option<CargoId>,
    pub destination: AirportId,
}

impl ActionOut {
    pub fn no_op() -> Self {
        Self {
            priority: None,
            cargo_to_load: None,
            cargo_to_unload: None,
            destination: cargoctl_core::NO_AIRPORT,
        }
    }
}

/// Per-agent free-form diagnostic warnings. Only `"ROUTE FROM:"`-prefixed
/// messages are consumed, by [`cargoctl_graph::OfflineEdges::ingest`].
#[derive(Debug, Clone, Default)]
pub struct Info {
    pub warnings: Vec<String>,
}
