//! Fluent builder for constructing a [`Controller`].

use std::collections::HashMap;

use cargoctl_cargo::loader::PlaneSpec;
use cargoctl_core::PlaneId;
use cargoctl_dispatch::{AgentAssignment, FreePool};
use cargoctl_graph::{OfflineEdges, PathCache, Router};
use cargoctl_plan::{Plane, PlaneStore};

use crate::controller::{Controller, PlaneCursor};

/// Fluent builder for [`Controller<R>`].
///
/// Only the router is required; everything else is per-episode state
/// supplied later through [`Controller::reset`], mirroring the
/// `reset`/`policies` lifecycle (§5): construction happens once per process,
/// `reset` happens once per episode.
pub struct ControllerBuilder<R: Router> {
    router: R,
    planes: Vec<PlaneSpec>,
}

impl<R: Router> ControllerBuilder<R> {
    pub fn new(router: R) -> Self {
        Self { router, planes: Vec::new() }
    }

    /// Supply the fleet definition used by the next [`Controller::reset`].
    pub fn planes(mut self, planes: Vec<PlaneSpec>) -> Self {
        self.planes = planes;
        self
    }

    /// Build an empty, not-yet-reset controller.
    pub fn build(self) -> Controller<R> {
        let store = PlaneStore::new(
            self.planes
                .iter()
                .map(|p| Plane::new(p.id, p.plane_type, p.location, p.max_weight))
                .collect(),
        );
        let cursors = self.planes.iter().map(|p| (p.id, PlaneCursor::default())).collect::<HashMap<_, _>>();
        let assignments = self.planes.iter().map(|p| (p.id, AgentAssignment::default())).collect::<HashMap<PlaneId, _>>();

        Controller {
            router: self.router,
            network: cargoctl_graph::NetworkSet::empty(),
            cache: PathCache::new(),
            store,
            cargo_plans: HashMap::new(),
            cargos: HashMap::new(),
            assignments,
            cursors,
            free_pool: FreePool::new(),
            offline: OfflineEdges::new(),
            processing_time: 0,
            latest_deadline: cargoctl_core::BIG_TIME,
            n_agents: self.planes.len() as u32,
            tick: 0,
        }
    }
}
