//! Memoized shortest-path cache with sub-path caching.
//!
//! Computing `(origin, destination)` also populates cache entries for every
//! intermediate airport on the discovered path, keyed against the same
//! destination — a later query for a sub-journey already on a cached path
//! costs a hash lookup instead of a fresh search.

use std::cell::RefCell;
use std::collections::HashMap;

use cargoctl_core::AirportId;

use crate::network::RouteGraph;
use crate::router::{Path, Router};
use crate::GraphError;

pub struct PathCache {
    entries: RefCell<HashMap<(AirportId, AirportId), Path>>,
}

impl PathCache {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Return the cached shortest path from `from` to `to`, computing and
    /// caching it (plus every sub-path along it) on a miss.
    pub fn get_path<R: Router>(
        &self,
        router: &R,
        graph: &RouteGraph,
        from: AirportId,
        to: AirportId,
    ) -> Result<Path, GraphError> {
        if let Some(p) = self.entries.borrow().get(&(from, to)) {
            return Ok(p.clone());
        }
        let path = router.route(graph, from, to)?;
        self.insert_with_suffixes(&path);
        Ok(path)
    }

    /// Number of cached entries — exposed for tests asserting suffix reuse.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert_with_suffixes(&self, path: &Path) {
        if path.is_trivial() {
            return;
        }
        let dest = *path.airports.last().expect("non-trivial path has a destination");
        let mut entries = self.entries.borrow_mut();
        for i in 0..path.airports.len() - 1 {
            let origin = path.airports[i];
            let key = (origin, dest);
            entries.entry(key).or_insert_with(|| path.suffix_from(i));
        }
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::RouteGraphBuilder;
    use crate::router::DijkstraRouter;

    fn chain_graph() -> RouteGraph {
        let mut b = RouteGraphBuilder::new();
        b.add_edge(AirportId(0), AirportId(1), 1, 10);
        b.add_edge(AirportId(1), AirportId(2), 1, 10);
        b.add_edge(AirportId(2), AirportId(3), 1, 10);
        b.build()
    }

    #[test]
    fn caches_full_path_and_every_suffix() {
        let graph = chain_graph();
        let cache = PathCache::new();
        let router = DijkstraRouter;
        let path = cache.get_path(&router, &graph, AirportId(0), AirportId(3)).unwrap();
        assert_eq!(path.airports, vec![AirportId(0), AirportId(1), AirportId(2), AirportId(3)]);
        // Full path + 3 suffixes (from 1, from 2; from 0 is the full path itself).
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn suffix_query_is_a_cache_hit() {
        let graph = chain_graph();
        let cache = PathCache::new();
        let router = DijkstraRouter;
        cache.get_path(&router, &graph, AirportId(0), AirportId(3)).unwrap();
        let before = cache.len();
        let sub = cache.get_path(&router, &graph, AirportId(1), AirportId(3)).unwrap();
        assert_eq!(cache.len(), before, "sub-path should already be cached");
        assert_eq!(sub.total_time, 20);
    }
}
