//! Assignment engine (C5).
//!
//! Walks cargo edges in `(floor(ep / BUCKET), sequence)` order and commits
//! each to the best-matching plane, mutating plane/leg state and feeding the
//! window propagator (C6).

use cargoctl_cargo::CargoEdge;
use cargoctl_core::{tw_overlap, AirportId, BIG_TIME};
use cargoctl_graph::{NetworkSet, PathCache, Router};

use crate::propagate::{propagate, WindowDiffs};
use crate::store::PlaneStore;
use crate::types::{Leg, Plane};

/// Bucket size for the coarse time-ordered processing pass; the source
/// experiments with 30, this core defaults to the larger 50.
pub const ASSIGNMENT_BUCKET: u64 = 50;

fn assignment_key(ce: &CargoEdge) -> (u64, u32) {
    (ce.ep / ASSIGNMENT_BUCKET, ce.sequence)
}

/// Estimated travel time between two airports over the union multigraph,
/// read off the path cache. `BIG_TIME` when unreachable.
fn travel_time<R: Router>(network: &NetworkSet, cache: &PathCache, router: &R, from: AirportId, to: AirportId) -> u64 {
    if from == to {
        return 0;
    }
    cache
        .get_path(router, network.union_graph(), from, to)
        .map(|p| p.total_time as u64)
        .unwrap_or(BIG_TIME)
}

fn type_reachable<R: Router>(network: &NetworkSet, router: &R, plane: &Plane, to: AirportId) -> bool {
    if plane.location == to {
        return true;
    }
    match network.graph_for(plane.plane_type) {
        Some(graph) => router.route(graph, plane.location, to).is_ok(),
        None => false,
    }
}

/// Lexicographic ranking key for `ce` against `plane`; lower sorts first.
fn matches<R: Router>(plane: &Plane, ce: &CargoEdge, network: &NetworkSet, cache: &PathCache, router: &R) -> (u8, u8, u8, i64, usize) {
    let cargo_overlap = if plane.cargo_ids.contains(&ce.cargo_id) { 0 } else { 1 };

    let same_edge_and_window_overlap = if plane.location == ce.origin
        && plane.next_destination == ce.destination
        && tw_overlap(plane.ep(), plane.lp(), ce.ep, ce.lp)
    {
        0
    } else {
        1
    };

    let destination_at_origin = if plane.next_destination == ce.origin { 0 } else { 1 };

    let timediff = plane.ep() as i64 + travel_time(network, cache, router, plane.location, ce.origin) as i64 - ce.ep as i64;

    (cargo_overlap, same_edge_and_window_overlap, destination_at_origin, timediff, plane.legs.len())
}

/// Whether `plane` is able to pick up `ce`, per the four-branch rule.
fn can_service<R: Router>(plane: &Plane, ce: &CargoEdge, network: &NetworkSet, cache: &PathCache, router: &R) -> bool {
    if !ce.allowed_plane_types.contains(&plane.plane_type) {
        return false;
    }
    if !type_reachable(network, router, plane, ce.origin) {
        return false;
    }

    if !plane.has_legs() {
        return true;
    }

    if plane.location == ce.origin
        && plane.next_destination == ce.destination
        && tw_overlap(plane.ep(), plane.lp(), ce.ep, ce.lp)
        && plane.cur_weight + ce.weight <= plane.max_weight
    {
        return true;
    }

    let last_duration = plane.last_leg().map(|l| l.duration()).unwrap_or(0);

    if plane.next_destination == ce.origin && plane.ep() + last_duration < ce.lp {
        return true;
    }

    let hop = travel_time(network, cache, router, plane.next_destination, ce.origin);
    plane.ep() + last_duration + hop < ce.lp
}

/// Commit `ce` onto `plane`, mutating its legs/weight/cargo set, and return
/// the window diffs plus the leg's pre-commit ep/lp the propagator needs for
/// the sibling stages.
fn add_cargo_edge<R: Router>(plane: &mut Plane, ce: &CargoEdge, network: &NetworkSet, cache: &PathCache, router: &R) -> (WindowDiffs, u64, u64) {
    let join_current_leg = plane.has_legs()
        && plane.location == ce.origin
        && plane.next_destination == ce.destination
        && tw_overlap(plane.ep(), plane.lp(), ce.ep, ce.lp)
        && plane.cur_weight + ce.weight <= plane.max_weight;

    let pre_leg_ep = plane.ep();
    let pre_leg_lp = plane.lp();

    let diffs = if join_current_leg {
        let ep_diff_ce = pre_leg_ep.saturating_sub(ce.ep);
        let lp_diff_ce = ce.lp.saturating_sub(pre_leg_lp);
        let ep_diff_leg = ce.ep.saturating_sub(pre_leg_ep);
        let lp_diff_leg = pre_leg_lp.saturating_sub(ce.lp);

        plane.cur_weight += ce.weight;
        plane.cargo_ids.insert(ce.cargo_id);
        plane.last_leg_mut().expect("join_current_leg implies a leg exists").push(ce.clone());

        WindowDiffs { ep_diff_ce, lp_diff_ce, ep_diff_leg, lp_diff_leg }
    } else {
        let last_duration = plane.last_leg().map(|l| l.duration()).unwrap_or(0);
        let hop = if plane.next_destination == ce.origin {
            0
        } else {
            travel_time(network, cache, router, plane.next_destination, ce.origin)
        };
        let new_ep = plane.ep() + last_duration + hop;
        let new_lp = if plane.has_legs() { plane.lp() + last_duration + hop } else { BIG_TIME };

        let ep_diff_ce = new_ep.saturating_sub(ce.ep);
        let lp_diff_leg = new_lp.saturating_sub(ce.lp);

        plane.cur_weight = ce.weight;
        plane.cargo_ids.clear();
        plane.cargo_ids.insert(ce.cargo_id);

        let leg_ep = new_ep.max(ce.ep);
        plane.legs.push(Leg::new(ce.clone(), leg_ep, ce.lp));

        WindowDiffs { ep_diff_ce, lp_diff_ce: 0, ep_diff_leg: 0, lp_diff_leg }
    };

    plane.next_destination = ce.destination;
    (diffs, pre_leg_ep, pre_leg_lp)
}

/// Assign every edge in `cargo_edges` to a plane, mutating `store` in place
/// and propagating window changes across already-assigned edges.
///
/// Unservicable edges are logged and left unassigned; partial planning is
/// expected, not an error.
pub fn plan_all<R: Router>(cargo_edges: &mut [CargoEdge], store: &mut PlaneStore, network: &NetworkSet, cache: &PathCache, router: &R) {
    let mut order: Vec<usize> = (0..cargo_edges.len()).collect();
    order.sort_by_key(|&i| assignment_key(&cargo_edges[i]));

    for idx in order {
        let ce = cargo_edges[idx].clone();

        let mut candidates: Vec<_> = store
            .planes
            .iter()
            .filter(|p| ce.allowed_plane_types.contains(&p.plane_type))
            .map(|p| p.id)
            .collect();
        candidates.sort_by_key(|&pid| matches(store.get(pid), &ce, network, cache, router));

        let chosen = candidates.into_iter().find(|&pid| can_service(store.get(pid), &ce, network, cache, router));

        match chosen {
            Some(pid) => {
                let (diffs, pre_leg_ep, pre_leg_lp) = add_cargo_edge(store.get_mut(pid), &ce, network, cache, router);
                store.record(ce.cargo_id, ce.sequence, pid);
                propagate(cargo_edges, store, &ce, pid, pre_leg_ep, pre_leg_lp, diffs);
            }
            None => {
                tracing::warn!(
                    cargo_id = ce.cargo_id.0,
                    sequence = ce.sequence,
                    "no plane can service cargo edge; leaving unassigned"
                );
            }
        }
    }
}
