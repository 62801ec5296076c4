//! Sub-path extraction (C7/C8): the prefix of a cargo's multigraph shortest
//! path that a single aircraft, confined to one connected group, can fly.

use cargoctl_core::{AirportId, PlaneTypeId};
use cargoctl_graph::NetworkSet;

/// Extend the prefix of `path` starting at `path[0]` while every hop stays
/// inside the same `(plane_type, component)` group. The remainder of `path`
/// belongs to a later aircraft.
pub fn extract_assigned_path(network: &NetworkSet, plane_type: PlaneTypeId, path: &[AirportId]) -> Vec<AirportId> {
    if path.len() < 2 {
        return path.to_vec();
    }

    let Some(group) = network.group_of(plane_type, path[0]) else {
        return path[..1].to_vec();
    };

    let mut prefix = vec![path[0]];
    for hop in path.windows(2) {
        let (u, v) = (hop[0], hop[1]);
        if network.group_of(plane_type, u) == Some(group) && network.group_of(plane_type, v) == Some(group) {
            prefix.push(v);
        } else {
            break;
        }
    }
    prefix
}
