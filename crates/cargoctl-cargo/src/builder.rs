//! Cargo-edge construction (C3).
//!
//! Expands a cargo's shortest path (by cost, over the union multigraph) into
//! an ordered sequence of [`CargoEdge`]s with derived earliest/latest pickup
//! windows.

use cargoctl_graph::{NetworkSet, PathCache, Router};

use crate::types::{Cargo, CargoEdge};

/// Build the ordered cargo edges for `cargo`.
///
/// Returns an empty vec for a cargo whose origin equals its destination
/// (delivered immediately, per the data model's zero-edge short-circuit), or
/// when no route exists, or when a hop on the route has no plane type able
/// to fly it — all three are logged and treated as "nothing to plan" rather
/// than a crash.
pub fn build_cargo_edges<R: Router>(
    cargo: &Cargo,
    network: &NetworkSet,
    cache: &PathCache,
    router: &R,
    processing_time: u64,
) -> Vec<CargoEdge> {
    if cargo.origin == cargo.destination {
        return Vec::new();
    }

    let path = match cache.get_path(router, network.union_graph(), cargo.origin, cargo.destination) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(cargo_id = cargo.id.0, %err, "no route for cargo; skipping");
            return Vec::new();
        }
    };

    if path.is_trivial() {
        return Vec::new();
    }

    let hops = path.hop_count();

    let mut allowed_per_hop = Vec::with_capacity(hops);
    for i in 0..hops {
        let allowed = network.allowed_plane_types(path.airports[i], path.airports[i + 1]);
        if allowed.is_empty() {
            tracing::warn!(
                cargo_id = cargo.id.0,
                origin = path.airports[i].0,
                destination = path.airports[i + 1].0,
                "cargo edge has no servicing plane type; skipping cargo"
            );
            return Vec::new();
        }
        allowed_per_hop.push(allowed.to_vec());
    }

    let durations: Vec<u64> = (0..hops)
        .map(|i| processing_time + path.hop_time[i] as u64 + processing_time)
        .collect();

    let mut edges = Vec::with_capacity(hops);
    let mut ep = cargo.earliest_pickup_time;
    for i in 0..hops {
        edges.push(CargoEdge {
            cargo_id: cargo.id,
            origin: path.airports[i],
            destination: path.airports[i + 1],
            sequence: (i + 1) as u32,
            duration: durations[i],
            ep,
            lp: 0,
            weight: cargo.weight,
            allowed_plane_types: allowed_per_hop[i].clone(),
        });
        ep += durations[i];
    }

    let mut lp = cargo.soft_deadline;
    for i in (0..hops).rev() {
        lp = lp.saturating_sub(durations[i]);
        edges[i].lp = lp;
    }

    edges
}
