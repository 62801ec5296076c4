//! Unit tests for cargoctl-graph.
//!
//! All tests use a hand-crafted network so they run without any scenario file.

#[cfg(test)]
mod helpers {
    use cargoctl_core::AirportId;
    use crate::{RouteGraph, RouteGraphBuilder};

    /// Build a small grid network for testing.
    ///
    /// Airports: 0, 1, 2, 3, 4. Undirected edges: 0-1, 1-2, 0-3, 2-4, 3-4.
    ///
    /// Cost/time are set so 0→1→2→4 (30) is always cheaper than 0→3→4 (60).
    pub fn grid_network() -> (RouteGraph, [AirportId; 5]) {
        let mut b = RouteGraphBuilder::new();

        let n0 = AirportId(0);
        let n1 = AirportId(1);
        let n2 = AirportId(2);
        let n3 = AirportId(3);
        let n4 = AirportId(4);

        let mut add_road = |b: &mut RouteGraphBuilder, a, c, cost, time| {
            b.add_edge(a, c, cost, time);
            b.add_edge(c, a, cost, time);
        };

        add_road(&mut b, n0, n1, 10, 10);
        add_road(&mut b, n1, n2, 10, 10);
        add_road(&mut b, n2, n4, 10, 10);
        add_road(&mut b, n0, n3, 50, 50);
        add_road(&mut b, n3, n4, 10, 10);

        (b.build(), [n0, n1, n2, n3, n4])
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use cargoctl_core::AirportId;
    use crate::RouteGraphBuilder;

    #[test]
    fn empty_build() {
        let graph = RouteGraphBuilder::new().build();
        assert_eq!(graph.airport_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn single_directed_edge() {
        let mut b = RouteGraphBuilder::new();
        b.add_edge(AirportId(0), AirportId(1), 5, 5);
        let graph = b.build();
        assert_eq!(graph.airport_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(AirportId(0), AirportId(1)));
        assert!(!graph.has_edge(AirportId(1), AirportId(0)));
    }

    #[test]
    fn csr_out_degree() {
        let (graph, [n0, n1, n2, n3, n4]) = super::helpers::grid_network();
        assert_eq!(graph.out_degree(n0), 2); // n0->n1, n0->n3
        assert_eq!(graph.out_degree(n2), 2); // n2->n1, n2->n4
        assert_eq!(graph.out_degree(n3), 2); // n3->n0, n3->n4
        assert_eq!(graph.out_degree(n4), 2); // n4->n2, n4->n3
        assert_eq!(graph.out_degree(n1), 2);
    }

    #[test]
    fn out_edges_report_correct_destination() {
        let (graph, [n0, n1, ..]) = super::helpers::grid_network();
        let reaches_n1 = graph.out_edges(n0).any(|(_, to, _, _)| to == n1);
        assert!(reaches_n1);
    }
}

// ── Dijkstra routing ────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use cargoctl_core::AirportId;
    use crate::{DijkstraRouter, GraphError, Router};

    #[test]
    fn trivial_same_airport() {
        let (graph, [n0, ..]) = super::helpers::grid_network();
        let path = DijkstraRouter.route(&graph, n0, n0).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.total_cost, 0);
    }

    #[test]
    fn shortest_path_by_cost() {
        let (graph, [n0, n1, n2, _, n4]) = super::helpers::grid_network();
        let path = DijkstraRouter.route(&graph, n0, n4).unwrap();
        assert_eq!(path.airports, vec![n0, n1, n2, n4]);
        assert_eq!(path.total_cost, 30);
        assert_eq!(path.total_time, 30);
    }

    #[test]
    fn no_route_disconnected() {
        use crate::RouteGraphBuilder;
        let mut b = RouteGraphBuilder::new();
        b.ensure_airport(AirportId(1));
        let graph = b.build();
        let result = DijkstraRouter.route(&graph, AirportId(0), AirportId(1));
        assert!(matches!(result, Err(GraphError::NoRoute { .. })));
    }

    #[test]
    fn directed_edge_blocks_return() {
        use crate::RouteGraphBuilder;
        let mut b = RouteGraphBuilder::new();
        b.add_edge(AirportId(0), AirportId(1), 1, 1);
        let graph = b.build();
        assert!(DijkstraRouter.route(&graph, AirportId(0), AirportId(1)).is_ok());
        assert!(DijkstraRouter.route(&graph, AirportId(1), AirportId(0)).is_err());
    }

    #[test]
    fn hop_count_and_is_trivial() {
        let (graph, [n0, _, _, _, n4]) = super::helpers::grid_network();
        let path = DijkstraRouter.route(&graph, n0, n4).unwrap();
        assert_eq!(path.hop_count(), 3);
        assert!(!path.is_trivial());
    }
}

// ── NetworkSet: per-type graphs, union graph, plane-type map ────────────────────

#[cfg(test)]
mod multigraph {
    use cargoctl_core::{AirportId, PlaneTypeId};
    use crate::NetworkSet;

    #[test]
    fn allowed_plane_types_reflects_registered_edges() {
        let mut b = NetworkSet::builder();
        b.add_edge(PlaneTypeId(0), AirportId(0), AirportId(1), 5, 5);
        b.add_edge(PlaneTypeId(1), AirportId(0), AirportId(1), 3, 3);
        let net = b.build();
        let types = net.allowed_plane_types(AirportId(0), AirportId(1));
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn union_graph_takes_min_cost_and_max_time() {
        let mut b = NetworkSet::builder();
        b.add_edge(PlaneTypeId(0), AirportId(0), AirportId(1), 5, 2);
        b.add_edge(PlaneTypeId(1), AirportId(0), AirportId(1), 3, 8);
        let net = b.build();
        let union = net.union_graph();
        let (_, _, cost, time) = union.out_edges(AirportId(0)).next().unwrap();
        assert_eq!(cost, 3); // min cost across types, for shortest-path queries
        assert_eq!(time, 8); // max time across types, for window derivation
    }

    #[test]
    fn per_type_graph_is_isolated() {
        let mut b = NetworkSet::builder();
        b.add_edge(PlaneTypeId(0), AirportId(0), AirportId(1), 1, 1);
        let net = b.build();
        assert!(net.graph_for(PlaneTypeId(0)).unwrap().has_edge(AirportId(0), AirportId(1)));
        assert!(net.graph_for(PlaneTypeId(1)).is_none());
    }
}
