//! Crate-level integration tests for cargoctl-cargo.
//!
//! Module-local unit tests for the builder and the loader live alongside
//! their implementations (`builder.rs`, `loader.rs`).

use cargoctl_core::{AirportId, CargoId, PlaneTypeId};
use cargoctl_graph::{DijkstraRouter, NetworkSet, PathCache};

use crate::{build_cargo_edges, Cargo};

#[test]
fn invariants_hold_across_a_multi_hop_path() {
    let mut b = NetworkSet::builder();
    b.add_edge(PlaneTypeId(0), AirportId(1), AirportId(2), 1, 10);
    b.add_edge(PlaneTypeId(0), AirportId(2), AirportId(3), 1, 10);
    b.add_edge(PlaneTypeId(0), AirportId(3), AirportId(4), 1, 10);
    let network = b.build();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let cargo = Cargo {
        id: CargoId(1),
        origin: AirportId(1),
        destination: AirportId(4),
        earliest_pickup_time: 0,
        soft_deadline: 200,
        hard_deadline: 300,
        weight: 10,
    };
    let edges = build_cargo_edges(&cargo, &network, &cache, &router, 5);
    assert_eq!(edges.len(), 3);

    for w in edges.windows(2) {
        assert!(w[1].ep >= w[0].ep + w[0].duration);
        assert!(w[1].lp >= w[0].lp + w[0].duration);
        assert!(w[0].ep <= w[0].lp);
    }
    assert!(edges.last().unwrap().ep <= edges.last().unwrap().lp);
}

#[test]
fn sequence_numbers_are_one_based_and_contiguous() {
    let mut b = NetworkSet::builder();
    b.add_edge(PlaneTypeId(0), AirportId(1), AirportId(2), 1, 10);
    b.add_edge(PlaneTypeId(0), AirportId(2), AirportId(3), 1, 10);
    let network = b.build();
    let cache = PathCache::new();
    let router = DijkstraRouter;

    let cargo = Cargo {
        id: CargoId(2),
        origin: AirportId(1),
        destination: AirportId(3),
        earliest_pickup_time: 0,
        soft_deadline: 100,
        hard_deadline: 200,
        weight: 1,
    };
    let edges = build_cargo_edges(&cargo, &network, &cache, &router, 5);
    let sequences: Vec<u32> = edges.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![1, 2]);
}
