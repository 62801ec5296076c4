//! `cargoctl-controller` — the `reset`/`policies` lifecycle orchestrator
//! tying the cargo-edge builder, assignment engine, window propagator, and
//! dispatcher into one controller.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|-------------------------------------------------------------------|
//! | [`boundary`] | Typed `Observation`/`Info`/`ActionOut` process-boundary records    |
//! | [`builder`]  | `ControllerBuilder`                                                |
//! | [`controller`] | `Controller` — owns all per-episode mutable state, `reset`/`policies` |
//! | [`observer`] | `ControllerObserver`, `NoopObserver` — diagnostics hooks            |
//! | [`error`]    | `ControllerError`, `ControllerResult<T>`                            |
//!
//! # Lifecycle
//!
//! `reset(obs, seed)` is called once per episode: it builds the route
//! network from `obs.global.route_map`, expands every active cargo into
//! cargo edges, and runs the assignment engine. `policies(obs, infos,
//! observer)` is called once per tick thereafter: it ingests outage
//! warnings, handles cargo that vanished from `active_cargo` (and purges it
//! from every plane's plan), admits any newly arrived cargo, and runs the
//! per-tick dispatcher FSM for every observed aircraft.

pub mod boundary;
pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;


pub use boundary::{ActionOut, AgentObservation, GlobalState, Info, Observation, RouteEdge, ScenarioInfo};
pub use builder::ControllerBuilder;
pub use controller::{Controller, PlaneCursor};
pub use error::{ControllerError, ControllerResult};
pub use observer::{ControllerObserver, NoopObserver};
