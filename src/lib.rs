//! # sway
//!
//! Deadline-bounded influence estimation for weighted directed graphs.
//!
//! Edge weights are read as the time influence takes to travel along an
//! edge. For every node with outgoing edges, the crate computes the set of
//! nodes reachable within a deadline `T` via minimum-time paths, then picks
//! the node with the largest such set (top-1) and the node adding the most
//! new reach on top of it (top-2). This is the greedy, brute-force end of
//! influence maximization: no submodularity machinery, just one shortest-path
//! run per candidate and a max-reduction with a deterministic tie-break.
//!
//! ```
//! use sway::{influence_map, marginal_influencer, top_influencer, Edge, Graph};
//!
//! let graph = Graph::from_edges([
//!     Edge { source: 1, target: 2, weight: 1.0 },
//!     Edge { source: 2, target: 3, weight: 1.0 },
//!     Edge { source: 1, target: 3, weight: 5.0 },
//!     Edge { source: 4, target: 5, weight: 1.0 },
//! ]);
//! let influence = influence_map(&graph, 2.0);
//! let top = top_influencer(&influence)?;
//! assert_eq!(top.node, 1); // reaches {1, 2, 3}: 1 -> 2 -> 3 costs 2.0
//! let second = marginal_influencer(&influence, &top.influencees)?;
//! assert_eq!(second.node, 4); // adds {4, 5}; node 2's reach is already covered
//! # Ok::<(), sway::InfluenceError>(())
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod select;
pub mod spread;

pub use dijkstra::{shortest_paths, DistanceMap};
pub use error::InfluenceError;
pub use graph::{parse_edge_list, Edge, Graph, NodeId};
pub use select::{marginal_influencer, top_influencer, MarginalInfluencer, TopInfluencer};
#[cfg(feature = "parallel")]
pub use spread::influence_map_parallel;
pub use spread::{influence_map, InfluenceMap};
