//! `PlaneStore` — per-plane state plus the cargo-edge-to-plane map.

use std::collections::HashMap;

use cargoctl_core::{CargoId, PlaneId};

use crate::types::Plane;

/// Holds every plane's state plus the `(cargo_id, sequence) -> plane_id`
/// lookup the propagator (C6) needs to find an already-assigned edge's leg.
pub struct PlaneStore {
    pub planes: Vec<Plane>,
    pub ce_plane_map: HashMap<(CargoId, u32), PlaneId>,
}

impl PlaneStore {
    pub fn new(planes: Vec<Plane>) -> Self {
        Self { planes, ce_plane_map: HashMap::new() }
    }

    pub fn get(&self, id: PlaneId) -> &Plane {
        &self.planes[id.index()]
    }

    pub fn get_mut(&mut self, id: PlaneId) -> &mut Plane {
        &mut self.planes[id.index()]
    }

    pub fn plane_for(&self, cargo_id: CargoId, sequence: u32) -> Option<PlaneId> {
        self.ce_plane_map.get(&(cargo_id, sequence)).copied()
    }

    pub fn record(&mut self, cargo_id: CargoId, sequence: u32, plane: PlaneId) {
        self.ce_plane_map.insert((cargo_id, sequence), plane);
    }
}
