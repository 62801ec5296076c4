//! Cargo and cargo-edge data types.

use cargoctl_core::{AirportId, CargoId, PlaneTypeId};

/// Immutable cargo descriptor as reported by the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cargo {
    pub id: CargoId,
    pub origin: AirportId,
    pub destination: AirportId,
    pub earliest_pickup_time: u64,
    pub soft_deadline: u64,
    pub hard_deadline: u64,
    pub weight: u32,
}

/// One hop of a cargo's shortest-path route, with its own derived time
/// window. The unit the assignment engine (C5) actually schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoEdge {
    pub cargo_id: CargoId,
    pub origin: AirportId,
    pub destination: AirportId,
    /// 1-based position of this edge within its cargo's path.
    pub sequence: u32,
    /// `travel_time + 2 * processing_time`.
    pub duration: u64,
    /// Earliest this edge's origin can be departed.
    pub ep: u64,
    /// Latest this edge's origin can be departed and still meet the soft deadline.
    pub lp: u64,
    pub weight: u32,
    pub allowed_plane_types: Vec<PlaneTypeId>,
}

impl CargoEdge {
    /// Stable key for lookups in `ce_plane_map` and for FIFO propagation
    /// dedup, per the design notes.
    pub fn key(&self) -> (CargoId, u32) {
        (self.cargo_id, self.sequence)
    }
}
