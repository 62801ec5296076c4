//! Controller observer trait for diagnostics and progress reporting.

use cargoctl_core::{CargoId, PlaneId};

/// Callbacks invoked by [`Controller`][crate::Controller] at key points in
/// `reset`/`policies`.
///
/// All methods have default no-op implementations; implementors override
/// only what they care about. These are observability-only per §7 — they
/// carry no control flow.
pub trait ControllerObserver {
    /// Called once, after `reset` finishes planning.
    fn on_reset(&mut self, _plane_count: usize, _cargo_edge_count: usize) {}

    /// Called at the start of each `policies` call.
    fn on_tick_start(&mut self, _tick: u64) {}

    /// A plane's onboard cargo vanished from `active_cargo` and was purged
    /// from every plane's plan.
    fn on_missed_cargo(&mut self, _plane: PlaneId, _cargo: CargoId) {}

    /// A plane was rerouted around an offline edge.
    fn on_reroute(&mut self, _plane: PlaneId) {}

    /// Called at the end of each `policies` call.
    fn on_tick_end(&mut self, _tick: u64) {}
}

/// A [`ControllerObserver`] that does nothing.
pub struct NoopObserver;

impl ControllerObserver for NoopObserver {}
