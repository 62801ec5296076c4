//! The per-tick dispatcher FSM (C9).
//!
//! This core implements the per-cargo assigned-path variant: `WAITING` and
//! `READY_FOR_TAKEOFF` produce meaningful actions, `MOVING`/`PROCESSING`
//! never do.

use std::collections::HashMap;

use cargoctl_core::{AirportId, CargoId, GroupId, PlaneId, PlaneTypeId};
use cargoctl_graph::{NetworkSet, OfflineEdges, Router, RouteGraphBuilder};

use crate::action::Action;
use crate::registry::{Assignment, AgentAssignment, CargoPlan, FreePool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Waiting,
    ReadyForTakeoff,
    Moving,
    Processing,
}

/// `WAITING` branch: load/unload decisions for a grounded aircraft.
pub fn dispatch_waiting(
    assignment: &mut AgentAssignment,
    cargo_plans: &mut HashMap<CargoId, CargoPlan>,
    location: AirportId,
    cargo_at_current_airport: bool,
    cargo_onboard: bool,
    priority: u32,
) -> Action {
    let Some(c) = assignment.cargo_id else { return Action::NoOp };

    if cargo_at_current_airport {
        return Action::Load { cargo_id: c, priority };
    }

    if cargo_onboard {
        if let Some(&last) = assignment.path.last() {
            if location == last {
                if let Some(plan) = cargo_plans.get_mut(&c) {
                    plan.cur_loc = location;
                    plan.assignment = if location == plan.dest { Assignment::Delivered } else { Assignment::Unassigned };
                }
                return Action::Unload { cargo_id: c, priority };
            }
        }
        if assignment.path.len() > 1 && location == assignment.path[0] {
            if let Some(plan) = cargo_plans.get_mut(&c) {
                plan.is_waiting = true;
            }
            assignment.path.remove(0);
        }
    }

    Action::NoOp
}

/// `READY_FOR_TAKEOFF` branch: departure and release decisions for an
/// airborne-capable aircraft already on the ground.
#[allow(clippy::too_many_arguments)]
pub fn dispatch_ready_for_takeoff<R: Router>(
    plane_id: PlaneId,
    plane_type: PlaneTypeId,
    assignment: &mut AgentAssignment,
    location: AirportId,
    cargo_at_current_airport: bool,
    cargo_onboard: bool,
    network: &NetworkSet,
    offline: &OfflineEdges,
    router: &R,
    free_pool: &mut FreePool,
    group: Option<GroupId>,
    priority: u32,
) -> Action {
    let Some(c) = assignment.cargo_id else {
        release_if_idle(plane_id, assignment, location, free_pool, group);
        return Action::NoOp;
    };

    if cargo_onboard {
        if assignment.path.len() >= 2 && !offline.is_offline(assignment.path[0], assignment.path[1]) {
            let next = assignment.path[1];
            assignment.path.remove(0);
            return Action::SetDestination { airport: next };
        }

        let dest = *assignment.path.last().unwrap_or(&location);
        if let Some(new_path) = pruned_route(network, offline, router, plane_type, location, dest) {
            if new_path.len() >= 2 {
                let next = new_path[1];
                assignment.path = new_path;
                return Action::SetDestination { airport: next };
            }
        }
        return Action::NoOp;
    }

    if assignment.path.len() == 1 && assignment.path[0] == location {
        release_if_idle(plane_id, assignment, location, free_pool, group);
        return Action::NoOp;
    }

    if !assignment.path.is_empty() && location == assignment.path[0] {
        return if cargo_at_current_airport {
            Action::Load { cargo_id: c, priority }
        } else {
            Action::NoOp
        };
    }

    let target = assignment.path.first().copied().unwrap_or(location);
    match pruned_route(network, offline, router, plane_type, location, target) {
        Some(new_path) if new_path.len() >= 2 => Action::SetDestination { airport: new_path[1] },
        _ => Action::NoOp,
    }
}

fn release_if_idle(plane_id: PlaneId, assignment: &mut AgentAssignment, location: AirportId, free_pool: &mut FreePool, group: Option<GroupId>) {
    if assignment.path.len() == 1 && assignment.path[0] == location {
        if let Some(g) = group {
            free_pool.insert(g, plane_id);
        }
        *assignment = AgentAssignment::default();
    }
}

/// Shortest path from `from` to `to` over `plane_type`'s subgraph with
/// offline edges removed. Returns the ordered airport list, or `None` if
/// unroutable even after pruning.
fn pruned_route<R: Router>(network: &NetworkSet, offline: &OfflineEdges, router: &R, plane_type: PlaneTypeId, from: AirportId, to: AirportId) -> Option<Vec<AirportId>> {
    let graph = network.graph_for(plane_type)?;

    if offline.is_empty() {
        return router.route(graph, from, to).ok().map(|p| p.airports);
    }

    let mut builder = RouteGraphBuilder::new();
    for i in 0..graph.edge_count() {
        let u = graph.edge_from(i);
        let v = graph.edge_to(i);
        if offline.is_offline(u, v) {
            continue;
        }
        builder.ensure_airport(u);
        builder.ensure_airport(v);
        builder.add_edge(u, v, graph.edge_cost(i), graph.edge_time(i));
    }
    let pruned = builder.build();
    router.route(&pruned, from, to).ok().map(|p| p.airports)
}
