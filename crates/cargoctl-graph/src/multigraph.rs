//! Per-plane-type route graphs, the derived union multigraph, and the
//! plane-type reachability map.

use std::collections::HashMap;

use cargoctl_core::{AirportId, PlaneTypeId};

use crate::groups::GroupPartition;
use crate::network::{RouteGraph, RouteGraphBuilder};

/// Holds one directed route graph per plane type plus a union graph (every
/// type merged, weighted for shortest-path queries) and the map of which
/// plane types can fly a given directed edge.
pub struct NetworkSet {
    per_type: HashMap<PlaneTypeId, RouteGraph>,
    union: RouteGraph,
    allowed_types: HashMap<(AirportId, AirportId), Vec<PlaneTypeId>>,
    groups: GroupPartition,
}

impl NetworkSet {
    pub fn builder() -> NetworkSetBuilder {
        NetworkSetBuilder::new()
    }

    pub fn empty() -> Self {
        NetworkSetBuilder::new().build()
    }

    /// The per-type subgraph a plane of this type may fly, if any planes of
    /// this type were registered.
    pub fn graph_for(&self, plane_type: PlaneTypeId) -> Option<&RouteGraph> {
        self.per_type.get(&plane_type)
    }

    /// The union multigraph spanning every plane type, used by the route
    /// cache for cargo-edge construction (C1/C3).
    pub fn union_graph(&self) -> &RouteGraph {
        &self.union
    }

    /// Every plane type whose subgraph contains the directed edge `(from, to)`.
    pub fn allowed_plane_types(&self, from: AirportId, to: AirportId) -> &[PlaneTypeId] {
        self.allowed_types
            .get(&(from, to))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn plane_types(&self) -> impl Iterator<Item = PlaneTypeId> + '_ {
        self.per_type.keys().copied()
    }

    /// The `(plane_type, component)` group a given airport belongs to for a
    /// given plane type, or `None` if it's an isolated airport with no
    /// reachable neighbors of that type (C4/C7/C8's group partition).
    pub fn group_of(&self, plane_type: PlaneTypeId, airport: AirportId) -> Option<cargoctl_core::GroupId> {
        self.groups.group_of(plane_type, airport)
    }
}

/// Construct a [`NetworkSet`] incrementally, then call [`build`](Self::build).
pub struct NetworkSetBuilder {
    edges: Vec<(PlaneTypeId, AirportId, AirportId, u32, u32)>,
}

impl NetworkSetBuilder {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Register a directed edge `from -> to` flyable by `plane_type`.
    pub fn add_edge(&mut self, plane_type: PlaneTypeId, from: AirportId, to: AirportId, cost: u32, time: u32) {
        self.edges.push((plane_type, from, to, cost, time));
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn build(self) -> NetworkSet {
        let mut per_type_builders: HashMap<PlaneTypeId, RouteGraphBuilder> = HashMap::new();
        let mut allowed_types: HashMap<(AirportId, AirportId), Vec<PlaneTypeId>> = HashMap::new();
        // (cost, time) accumulator for the union graph: min cost (shortest-path
        // weight), max time (per the travel-time cache rule in the design doc).
        let mut union_edges: HashMap<(AirportId, AirportId), (u32, u32)> = HashMap::new();

        for (plane_type, from, to, cost, time) in &self.edges {
            per_type_builders
                .entry(*plane_type)
                .or_insert_with(RouteGraphBuilder::new)
                .add_edge(*from, *to, *cost, *time);

            let types = allowed_types.entry((*from, *to)).or_default();
            if !types.contains(plane_type) {
                types.push(*plane_type);
            }

            union_edges
                .entry((*from, *to))
                .and_modify(|(c, t)| {
                    *c = (*c).min(*cost);
                    *t = (*t).max(*time);
                })
                .or_insert((*cost, *time));
        }

        let per_type: HashMap<PlaneTypeId, RouteGraph> = per_type_builders
            .into_iter()
            .map(|(ty, b)| (ty, b.build()))
            .collect();

        let mut union_builder = RouteGraphBuilder::new();
        for ((from, to), (cost, time)) in &union_edges {
            union_builder.add_edge(*from, *to, *cost, *time);
        }
        let union = union_builder.build();

        let groups = GroupPartition::build(&per_type);

        NetworkSet {
            per_type,
            union,
            allowed_types,
            groups,
        }
    }
}

impl Default for NetworkSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
