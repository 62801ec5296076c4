//! Crate-level integration tests for cargoctl-plan.

use cargoctl_cargo::build_cargo_edges;
use cargoctl_core::{AirportId, CargoId, PlaneId, PlaneTypeId};
use cargoctl_graph::{DijkstraRouter, NetworkSet, PathCache};

use crate::types::Plane;
use crate::{plan_all, PlaneStore};

fn single_hop_network() -> NetworkSet {
    let mut b = NetworkSet::builder();
    b.add_edge(PlaneTypeId(0), AirportId(1), AirportId(2), 1, 10);
    b.build()
}

fn cargo(id: u32, origin: u32, destination: u32, ep: u64, soft_deadline: u64, weight: u32) -> cargoctl_cargo::Cargo {
    cargoctl_cargo::Cargo {
        id: CargoId(id),
        origin: AirportId(origin),
        destination: AirportId(destination),
        earliest_pickup_time: ep,
        soft_deadline,
        hard_deadline: soft_deadline + 100,
        weight,
    }
}

#[test]
fn lone_cargo_is_assigned_to_the_only_plane() {
    let network = single_hop_network();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let mut edges = build_cargo_edges(&cargo(1, 1, 2, 0, 100, 10), &network, &cache, &router, 5);
    let mut store = PlaneStore::new(vec![Plane::new(PlaneId(0), PlaneTypeId(0), AirportId(1), 100)]);

    plan_all(&mut edges, &mut store, &network, &cache, &router);

    assert_eq!(store.plane_for(CargoId(1), 1), Some(PlaneId(0)));
    let plane = store.get(PlaneId(0));
    assert_eq!(plane.legs.len(), 1);
    assert_eq!(plane.cur_weight, 10);
    assert_eq!(plane.next_destination, AirportId(2));
}

#[test]
fn overlapping_cargo_on_same_edge_joins_existing_leg() {
    let network = single_hop_network();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let mut edges = build_cargo_edges(&cargo(1, 1, 2, 0, 100, 10), &network, &cache, &router, 5);
    edges.extend(build_cargo_edges(&cargo(2, 1, 2, 0, 100, 10), &network, &cache, &router, 5));

    let mut store = PlaneStore::new(vec![Plane::new(PlaneId(0), PlaneTypeId(0), AirportId(1), 100)]);
    plan_all(&mut edges, &mut store, &network, &cache, &router);

    assert_eq!(store.plane_for(CargoId(1), 1), Some(PlaneId(0)));
    assert_eq!(store.plane_for(CargoId(2), 1), Some(PlaneId(0)));
    let plane = store.get(PlaneId(0));
    assert_eq!(plane.legs.len(), 1);
    assert_eq!(plane.legs[0].members.len(), 2);
    assert_eq!(plane.cur_weight, 20);
}

#[test]
fn non_overlapping_windows_require_a_second_plane() {
    // S2: tightening one cargo's window so it no longer overlaps the
    // other's must prevent the leg merge and force a distinct plane.
    let network = single_hop_network();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let mut edges = build_cargo_edges(&cargo(1, 1, 2, 0, 30, 10), &network, &cache, &router, 5);
    edges.extend(build_cargo_edges(&cargo(2, 1, 2, 500, 600, 10), &network, &cache, &router, 5));

    let mut store = PlaneStore::new(vec![
        Plane::new(PlaneId(0), PlaneTypeId(0), AirportId(1), 100),
        Plane::new(PlaneId(1), PlaneTypeId(0), AirportId(1), 100),
    ]);
    plan_all(&mut edges, &mut store, &network, &cache, &router);

    let p1 = store.plane_for(CargoId(1), 1).expect("cargo 1 assigned");
    let p2 = store.plane_for(CargoId(2), 1).expect("cargo 2 assigned");
    assert_ne!(p1, p2, "non-overlapping windows must not share a leg");
}

#[test]
fn s3_committing_an_edge_propagates_ep_to_its_later_sibling() {
    // S3: a plane already committed to one leg (the dummy cargo below) picks
    // up a second cargo whose first edge starts where that leg ends; the new
    // leg's ep is pushed past the edge's own natural ep by the prior leg's
    // duration, and that shift must propagate forward onto the second
    // cargo's later, not-yet-assigned edge.
    let mut b = NetworkSet::builder();
    b.add_edge(PlaneTypeId(0), AirportId(0), AirportId(1), 1, 15);
    b.add_edge(PlaneTypeId(0), AirportId(1), AirportId(2), 1, 10);
    b.add_edge(PlaneTypeId(0), AirportId(2), AirportId(3), 1, 20);
    let network = b.build();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let mut edges = build_cargo_edges(&cargo(1, 0, 1, 0, 1000, 1), &network, &cache, &router, 5);
    edges.extend(build_cargo_edges(&cargo(2, 1, 3, 0, 1000, 1), &network, &cache, &router, 5));
    assert_eq!(edges.len(), 3, "dummy edge plus two target-cargo edges");
    let natural_ep_e1 = edges[1].ep;
    let natural_ep_e2 = edges[2].ep;

    let mut store = PlaneStore::new(vec![Plane::new(PlaneId(0), PlaneTypeId(0), AirportId(0), 100)]);
    plan_all(&mut edges, &mut store, &network, &cache, &router);

    assert_eq!(store.plane_for(CargoId(2), 1), Some(PlaneId(0)));
    let plane = store.get(PlaneId(0));
    assert_eq!(plane.legs.len(), 2, "dummy leg plus the target cargo's leg");
    let shift = plane.legs[1].ep - natural_ep_e1;
    assert!(shift > 0, "picking up cargo 2 after finishing the dummy leg must push its ep past its natural value");

    // The still-unassigned second edge of cargo 2 must absorb the same shift.
    assert_eq!(edges[2].ep, natural_ep_e2 + shift);
}

#[test]
fn first_assignment_counts_travel_time_to_a_distant_cargo_origin() {
    // The plane starts at airport 0, ten ticks from the cargo's origin at
    // airport 1; can_service allows this (a plane with no legs can be
    // assigned anywhere), but the committed leg's ep must still reflect that
    // ten-tick hop rather than being credited as zero.
    let mut b = NetworkSet::builder();
    b.add_edge(PlaneTypeId(0), AirportId(0), AirportId(1), 1, 10);
    b.add_edge(PlaneTypeId(0), AirportId(1), AirportId(2), 1, 10);
    let network = b.build();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let mut edges = build_cargo_edges(&cargo(1, 1, 2, 0, 1000, 10), &network, &cache, &router, 5);
    let mut store = PlaneStore::new(vec![Plane::new(PlaneId(0), PlaneTypeId(0), AirportId(0), 100)]);

    plan_all(&mut edges, &mut store, &network, &cache, &router);

    assert_eq!(store.plane_for(CargoId(1), 1), Some(PlaneId(0)));
    let plane = store.get(PlaneId(0));
    assert_eq!(plane.legs.len(), 1);
    assert_eq!(plane.legs[0].ep, 10, "leg ep must account for the 10-tick hop to the cargo's origin");
}

#[test]
fn unservicable_cargo_is_left_unassigned_not_a_panic() {
    let network = single_hop_network();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let mut edges = build_cargo_edges(&cargo(1, 1, 2, 0, 100, 10), &network, &cache, &router, 5);
    let mut store = PlaneStore::new(vec![Plane::new(PlaneId(0), PlaneTypeId(9), AirportId(1), 100)]);

    plan_all(&mut edges, &mut store, &network, &cache, &router);
    assert_eq!(store.plane_for(CargoId(1), 1), None);
}
