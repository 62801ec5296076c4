//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner calls routing via the [`Router`] trait, so an application can
//! swap in a different shortest-path algorithm (contraction hierarchies, A*,
//! a cached precomputed matrix) without touching the planner or dispatcher.
//! The default [`DijkstraRouter`] is sufficient for every case this core
//! needs.
//!
//! # Cost units
//!
//! Routing is by `cost` (the planning weight), not by travel time — travel
//! time is a separate per-edge attribute read off the winning path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use cargoctl_core::AirportId;

use crate::network::RouteGraph;
use crate::GraphError;

/// The result of a routing query: an ordered list of airports from source to
/// destination (inclusive of both endpoints), plus per-hop cost/time so a
/// cache can derive any suffix of this path without re-running the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub airports: Vec<AirportId>,
    /// `hop_cost[i]` is the cost of the edge `airports[i] -> airports[i+1]`.
    pub hop_cost: Vec<u32>,
    /// `hop_time[i]` is the travel time of the edge `airports[i] -> airports[i+1]`.
    pub hop_time: Vec<u32>,
    pub total_cost: u32,
    pub total_time: u32,
}

impl Path {
    /// `true` if source and destination are the same airport.
    pub fn is_trivial(&self) -> bool {
        self.airports.len() <= 1
    }

    /// Number of hops (edges) on this path.
    pub fn hop_count(&self) -> usize {
        self.airports.len().saturating_sub(1)
    }

    /// The suffix of this path starting at airport index `i` (0-based,
    /// inclusive) through the destination, with cost/time recomputed for
    /// just that suffix. Used to seed cache entries for every intermediate
    /// airport on a computed path.
    pub fn suffix_from(&self, i: usize) -> Path {
        let airports = self.airports[i..].to_vec();
        let hop_cost = self.hop_cost[i..].to_vec();
        let hop_time = self.hop_time[i..].to_vec();
        Path {
            total_cost: hop_cost.iter().sum(),
            total_time: hop_time.iter().sum(),
            airports,
            hop_cost,
            hop_time,
        }
    }
}

/// Pluggable shortest-path engine over a [`RouteGraph`].
pub trait Router: Send + Sync {
    /// Compute the lowest-cost path from `from` to `to`.
    ///
    /// `from == to` is handled as a single-airport trivial path rather than
    /// an error.
    fn route(&self, graph: &RouteGraph, from: AirportId, to: AirportId) -> Result<Path, GraphError>;
}

/// Standard Dijkstra's algorithm over the CSR route graph, weighted by edge
/// `cost`.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RouteGraph, from: AirportId, to: AirportId) -> Result<Path, GraphError> {
        dijkstra(graph, from, to)
    }
}

const INVALID_EDGE: usize = usize::MAX;

fn dijkstra(graph: &RouteGraph, from: AirportId, to: AirportId) -> Result<Path, GraphError> {
    if from == to {
        return Ok(Path {
            airports: vec![from],
            hop_cost: vec![],
            hop_time: vec![],
            total_cost: 0,
            total_time: 0,
        });
    }

    let n = graph.airport_count();
    if from.index() >= n || to.index() >= n {
        return Err(GraphError::AirportNotFound(if from.index() >= n { from } else { to }));
    }

    let mut dist = vec![u32::MAX; n];
    let mut prev_edge = vec![INVALID_EDGE; n];

    dist[from.index()] = 0;

    let mut heap: BinaryHeap<Reverse<(u32, AirportId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(graph, &prev_edge, from, to, cost));
        }
        if cost > dist[node.index()] {
            continue;
        }
        for (edge_idx, neighbor, edge_cost, _time) in graph.out_edges(node) {
            let new_cost = cost.saturating_add(edge_cost);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge_idx;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(
    graph: &RouteGraph,
    prev_edge: &[usize],
    from: AirportId,
    to: AirportId,
    total_cost: u32,
) -> Path {
    let mut airports = vec![to];
    let mut hop_cost = Vec::new();
    let mut hop_time = Vec::new();
    let mut total_time = 0u32;
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == INVALID_EDGE {
            break;
        }
        hop_cost.push(graph.edge_cost(e));
        hop_time.push(graph.edge_time(e));
        total_time += graph.edge_time(e);
        cur = graph.edge_from(e);
        airports.push(cur);
        if cur == from {
            break;
        }
    }
    airports.reverse();
    hop_cost.reverse();
    hop_time.reverse();
    Path {
        airports,
        hop_cost,
        hop_time,
        total_cost,
        total_time,
    }
}
