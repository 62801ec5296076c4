//! `cargoctl-graph` — per-plane-type route graphs, routing, path memoisation,
//! and outage tracking.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|-----------------------------------------------------------|
//! | [`network`]   | `RouteGraph` (CSR), `RouteGraphBuilder`                   |
//! | [`multigraph`]| `NetworkSet` — per-type graphs + union graph + type map   |
//! | [`groups`]    | Weakly-connected-component group partitioning             |
//! | [`router`]    | `Router` trait, `Path`, `DijkstraRouter`                  |
//! | [`cache`]     | `PathCache` — memoized shortest paths with sub-path reuse |
//! | [`outage`]    | `OfflineEdges` — temporary edge-outage tracker (C10)      |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.            |

pub mod cache;
pub mod error;
pub mod groups;
pub mod multigraph;
pub mod network;
pub mod outage;
pub mod router;

#[cfg(test)]
mod tests;

pub use cache::PathCache;
pub use error::{GraphError, GraphResult};
pub use multigraph::{NetworkSet, NetworkSetBuilder};
pub use network::{RouteGraph, RouteGraphBuilder};
pub use outage::OfflineEdges;
pub use router::{DijkstraRouter, Path, Router};
