//! Cargo-plan and assignment registries (C7, C8).

use std::collections::HashMap;

use cargoctl_core::{AirportId, GroupId, PlaneId};

/// Who, if anyone, currently owns a cargo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Unassigned,
    Plane(PlaneId),
    /// Reached its destination; the sentinel agent in the data model.
    Delivered,
}

/// Per-cargo delivery bookkeeping the dispatcher updates as it (un)loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoPlan {
    pub cur_loc: AirportId,
    pub dest: AirportId,
    pub assignment: Assignment,
    pub is_waiting: bool,
}

impl CargoPlan {
    pub fn new(origin: AirportId, dest: AirportId) -> Self {
        if origin == dest {
            return Self { cur_loc: origin, dest, assignment: Assignment::Delivered, is_waiting: false };
        }
        Self { cur_loc: origin, dest, assignment: Assignment::Unassigned, is_waiting: false }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.assignment, Assignment::Delivered)
    }
}

/// The planner-chosen sub-path an aircraft is currently flying, and the
/// cargo it is carrying it for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentAssignment {
    pub cargo_id: Option<cargoctl_core::CargoId>,
    pub path: Vec<AirportId>,
}

impl AgentAssignment {
    pub fn is_idle(&self) -> bool {
        self.cargo_id.is_none()
    }
}

/// Per-group pool of aircraft with no active assignment.
#[derive(Debug, Default)]
pub struct FreePool {
    pools: HashMap<GroupId, Vec<PlaneId>>,
}

impl FreePool {
    pub fn new() -> Self {
        Self { pools: HashMap::new() }
    }

    pub fn insert(&mut self, group: GroupId, plane: PlaneId) {
        let members = self.pools.entry(group).or_default();
        if !members.contains(&plane) {
            members.push(plane);
        }
    }

    pub fn remove(&mut self, group: GroupId, plane: PlaneId) {
        if let Some(members) = self.pools.get_mut(&group) {
            members.retain(|&p| p != plane);
        }
    }

    pub fn take_any(&mut self, group: GroupId) -> Option<PlaneId> {
        let members = self.pools.get_mut(&group)?;
        let plane = members.pop()?;
        Some(plane)
    }

    pub fn members(&self, group: GroupId) -> &[PlaneId] {
        self.pools.get(&group).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargoctl_core::PlaneTypeId;

    fn group() -> GroupId {
        GroupId::new(PlaneTypeId(0), 1)
    }

    #[test]
    fn cargo_plan_same_origin_destination_starts_delivered() {
        let plan = CargoPlan::new(AirportId(1), AirportId(1));
        assert!(plan.is_delivered());
    }

    #[test]
    fn free_pool_insert_remove_take() {
        let mut pool = FreePool::new();
        pool.insert(group(), PlaneId(0));
        pool.insert(group(), PlaneId(1));
        pool.remove(group(), PlaneId(0));
        assert_eq!(pool.members(group()), &[PlaneId(1)]);
        assert_eq!(pool.take_any(group()), Some(PlaneId(1)));
        assert_eq!(pool.take_any(group()), None);
    }

    #[test]
    fn free_pool_insert_is_idempotent() {
        let mut pool = FreePool::new();
        pool.insert(group(), PlaneId(0));
        pool.insert(group(), PlaneId(0));
        assert_eq!(pool.members(group()).len(), 1);
    }
}
