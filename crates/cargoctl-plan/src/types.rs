//! Plane and leg state (C4).

use std::collections::HashSet;

use cargoctl_core::{AirportId, BIG_TIME, CargoId, PlaneId, PlaneTypeId};
use cargoctl_cargo::CargoEdge;

/// A contiguous run of cargo edges sharing an origin/destination and an
/// overlapping time window, flown as a unit by one plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub members: Vec<CargoEdge>,
    pub ep: u64,
    pub lp: u64,
}

impl Leg {
    /// Open a new leg starting with `edge`.
    pub fn new(edge: CargoEdge, ep: u64, lp: u64) -> Self {
        Self { members: vec![edge], ep, lp }
    }

    pub fn origin(&self) -> AirportId {
        self.members[0].origin
    }

    pub fn destination(&self) -> AirportId {
        self.members[0].destination
    }

    /// Duration of the leg's last member edge, per the data model.
    pub fn duration(&self) -> u64 {
        self.members.last().expect("leg always has >= 1 member").duration
    }

    pub fn push(&mut self, edge: CargoEdge) {
        self.ep = self.ep.max(edge.ep);
        self.lp = self.lp.min(edge.lp);
        self.members.push(edge);
    }
}

/// Mutable per-aircraft state tracked for the whole episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    pub id: PlaneId,
    pub plane_type: PlaneTypeId,
    pub location: AirportId,
    pub next_destination: AirportId,
    pub max_weight: u32,
    pub cur_weight: u32,
    pub cargo_ids: HashSet<CargoId>,
    pub legs: Vec<Leg>,
}

impl Plane {
    pub fn new(id: PlaneId, plane_type: PlaneTypeId, location: AirportId, max_weight: u32) -> Self {
        Self {
            id,
            plane_type,
            location,
            next_destination: location,
            max_weight,
            cur_weight: 0,
            cargo_ids: HashSet::new(),
            legs: Vec::new(),
        }
    }

    pub fn has_legs(&self) -> bool {
        !self.legs.is_empty()
    }

    pub fn last_leg(&self) -> Option<&Leg> {
        self.legs.last()
    }

    pub fn last_leg_mut(&mut self) -> Option<&mut Leg> {
        self.legs.last_mut()
    }

    /// Earliest pickup of the plane's outstanding commitments; `0` when idle.
    pub fn ep(&self) -> u64 {
        self.last_leg().map(|l| l.ep).unwrap_or(0)
    }

    /// Latest pickup of the plane's outstanding commitments; `BIG_TIME` when idle.
    pub fn lp(&self) -> u64 {
        self.last_leg().map(|l| l.lp).unwrap_or(BIG_TIME)
    }
}
