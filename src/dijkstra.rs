//! Single-source shortest paths under non-negative edge weights.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::NotNan;

use crate::graph::{Graph, NodeId};

/// Minimum cumulative weight from a fixed source to each node.
///
/// Keys are every node that appears as an edge target anywhere in the graph,
/// plus the source itself at 0.0. Targets the source cannot reach keep
/// `f64::INFINITY`.
pub type DistanceMap = HashMap<NodeId, f64>;

/// Dijkstra's algorithm with a lazy-deletion binary heap.
///
/// The distance table is scoped to all edge targets graph-wide, not just the
/// subgraph reachable from `source`; downstream deadline filtering relies on
/// unreachable targets being present at `INFINITY`. `source` need not have
/// outgoing edges, in which case it reaches only itself at distance 0.
///
/// Precondition: edge weights are non-negative (and non-NaN). The output is
/// undefined otherwise; [`Graph::validate_nonnegative`] checks this
/// explicitly.
pub fn shortest_paths(graph: &Graph, source: NodeId) -> DistanceMap {
    let mut dist: DistanceMap = graph.targets().map(|t| (t, f64::INFINITY)).collect();
    dist.insert(source, 0.0);

    // Improvements push a fresh heap entry; superseded entries are skipped
    // on pop. Equal-distance pop order is heap order, which cannot change
    // the final map under non-negative weights.
    let mut heap: BinaryHeap<Reverse<(NotNan<f64>, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((NotNan::new(0.0).unwrap(), source)));

    while let Some(Reverse((d, node))) = heap.pop() {
        let d = d.into_inner();
        if d > dist.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue; // stale entry
        }
        let Some(neighbors) = graph.neighbors(node) else {
            continue;
        };
        for (&next, &weight) in neighbors {
            let candidate = d + weight;
            let current = dist.get(&next).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                dist.insert(next, candidate);
                // `candidate < current` already excluded NaN.
                heap.push(Reverse((NotNan::new(candidate).unwrap(), next)));
            }
        }
    }

    dist
}
