//! Directed route multigraph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given an `AirportId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_cost`, `edge_time`) are
//! sorted by source node and indexed by edge position — ideal for Dijkstra's
//! inner loop, which needs only a contiguous memory scan per node.

use cargoctl_core::AirportId;

/// Directed route graph in CSR format. Used both for a single plane type's
/// subgraph and for the union multigraph spanning every type.
pub struct RouteGraph {
    airport_count: usize,

    /// CSR row pointer. Outgoing edges of airport `n` occupy indices
    /// `node_out_start[n] .. node_out_start[n+1]`. Length = `airport_count + 1`.
    node_out_start: Vec<u32>,

    /// Source airport of each edge, redundant with CSR but needed to walk a
    /// path backward during reconstruction.
    edge_from: Vec<AirportId>,
    /// Destination airport of each edge.
    edge_to: Vec<AirportId>,
    /// Planning cost of each edge (Dijkstra weight for the route cache).
    edge_cost: Vec<u32>,
    /// Travel time of each edge, in ticks.
    edge_time: Vec<u32>,
}

impl RouteGraph {
    pub fn empty() -> Self {
        RouteGraphBuilder::new().build()
    }

    pub fn airport_count(&self) -> usize {
        self.airport_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Iterate `(edge_index, destination, cost, time)` for every outgoing
    /// edge of `node`. No heap allocation — a contiguous index range.
    #[inline]
    pub fn out_edges(&self, node: AirportId) -> impl Iterator<Item = (usize, AirportId, u32, u32)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(move |i| (i, self.edge_to[i], self.edge_cost[i], self.edge_time[i]))
    }

    pub fn out_degree(&self, node: AirportId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    pub fn edge_from(&self, edge_index: usize) -> AirportId {
        self.edge_from[edge_index]
    }

    pub fn edge_to(&self, edge_index: usize) -> AirportId {
        self.edge_to[edge_index]
    }

    pub fn edge_cost(&self, edge_index: usize) -> u32 {
        self.edge_cost[edge_index]
    }

    pub fn edge_time(&self, edge_index: usize) -> u32 {
        self.edge_time[edge_index]
    }

    /// Does this graph contain the directed edge `(u, v)`? Used to test
    /// reachability of a single hop without running a search.
    pub fn has_edge(&self, u: AirportId, v: AirportId) -> bool {
        self.out_edges(u).any(|(_, to, _, _)| to == v)
    }

    /// Travel time of edge `(u, v)` if present.
    pub fn edge_time_between(&self, u: AirportId, v: AirportId) -> Option<u32> {
        self.out_edges(u)
            .find(|(_, to, _, _)| *to == v)
            .map(|(_, _, _, time)| time)
    }
}

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
pub struct RouteGraphBuilder {
    airport_count: usize,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: AirportId,
    to: AirportId,
    cost: u32,
    time: u32,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self {
            airport_count: 0,
            raw_edges: Vec::new(),
        }
    }

    pub fn with_capacity(airports: usize, edges: usize) -> Self {
        Self {
            airport_count: airports,
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Reserve room for airport ids up to (and including) `id` — the builder
    /// does not require airports to be registered before edges referencing
    /// them are added.
    pub fn ensure_airport(&mut self, id: AirportId) {
        self.airport_count = self.airport_count.max(id.index() + 1);
    }

    /// Add a directed edge `from -> to` with the given planning cost and
    /// travel time (in ticks).
    pub fn add_edge(&mut self, from: AirportId, to: AirportId, cost: u32, time: u32) {
        self.ensure_airport(from);
        self.ensure_airport(to);
        self.raw_edges.push(RawEdge { from, to, cost, time });
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RouteGraph`].
    pub fn build(self) -> RouteGraph {
        let airport_count = self.airport_count;
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<AirportId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<AirportId> = raw.iter().map(|e| e.to).collect();
        let edge_cost: Vec<u32> = raw.iter().map(|e| e.cost).collect();
        let edge_time: Vec<u32> = raw.iter().map(|e| e.time).collect();

        let mut node_out_start = vec![0u32; airport_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=airport_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[airport_count] as usize, edge_count);

        RouteGraph {
            airport_count,
            node_out_start,
            edge_from,
            edge_to,
            edge_cost,
            edge_time,
        }
    }
}

impl Default for RouteGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
