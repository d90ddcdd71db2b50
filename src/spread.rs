//! Deadline-bounded reachability aggregation.
//!
//! One shortest-path run per node with outgoing edges; the dominant cost of
//! the whole pipeline. Runs are independent of each other, so the `parallel`
//! feature fans them out across rayon workers with identical output.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::debug;

use crate::dijkstra::shortest_paths;
use crate::graph::{Graph, NodeId};

/// Influencer → nodes it reaches within the deadline.
///
/// Nodes with no outgoing edges never appear as keys. For `deadline >= 0`
/// every key's set contains the key itself (distance-to-self is 0); a
/// negative deadline therefore yields an empty map.
pub type InfluenceMap = HashMap<NodeId, HashSet<NodeId>>;

/// Compute the influencee set of every candidate influencer.
///
/// Each source gets a fresh shortest-path run; nothing is shared or cached
/// between sources.
pub fn influence_map(graph: &Graph, deadline: f64) -> InfluenceMap {
    let started = Instant::now();
    let map: InfluenceMap = graph
        .sources()
        .filter_map(|source| influencees(graph, source, deadline).map(|set| (source, set)))
        .collect();
    debug!(
        sources = map.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "influence map computed"
    );
    map
}

/// [`influence_map`] with the per-source runs spread across rayon workers.
///
/// Results are fully collected before any ranking happens, so the
/// deterministic tie-break in selection is unaffected by scheduling order.
#[cfg(feature = "parallel")]
pub fn influence_map_parallel(graph: &Graph, deadline: f64) -> InfluenceMap {
    use rayon::prelude::*;

    let started = Instant::now();
    let sources: Vec<NodeId> = graph.sources().collect();
    let map: InfluenceMap = sources
        .into_par_iter()
        .filter_map(|source| influencees(graph, source, deadline).map(|set| (source, set)))
        .collect();
    debug!(
        sources = map.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "influence map computed (parallel)"
    );
    map
}

/// Nodes reachable from `source` within the deadline, or `None` when nothing
/// qualifies (the entry is dropped rather than stored empty).
fn influencees(graph: &Graph, source: NodeId, deadline: f64) -> Option<HashSet<NodeId>> {
    let reached: HashSet<NodeId> = shortest_paths(graph, source)
        .into_iter()
        .filter(|&(_, time)| time <= deadline)
        .map(|(node, _)| node)
        .collect();
    if reached.is_empty() {
        None
    } else {
        Some(reached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn edge(source: NodeId, target: NodeId, weight: f64) -> Edge {
        Edge { source, target, weight }
    }

    fn set(nodes: &[NodeId]) -> HashSet<NodeId> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn triangle_within_deadline() {
        // 1 -> 2 -> 3 at cost 2.0 beats the direct 1 -> 3 edge at 5.0
        let g = Graph::from_edges([edge(1, 2, 1.0), edge(2, 3, 1.0), edge(1, 3, 5.0)]);
        let map = influence_map(&g, 2.0);
        assert_eq!(map[&1], set(&[1, 2, 3]));
        assert_eq!(map[&2], set(&[2, 3]));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn source_reaches_itself_at_zero_deadline() {
        let g = Graph::from_edges([edge(1, 2, 1.0)]);
        let map = influence_map(&g, 0.0);
        assert_eq!(map[&1], set(&[1]));
    }

    #[test]
    fn negative_deadline_yields_empty_map() {
        // Even distance-to-self (0) exceeds a negative deadline.
        let g = Graph::from_edges([edge(1, 2, 1.0), edge(2, 3, 1.0)]);
        assert!(influence_map(&g, -1.0).is_empty());
    }

    #[test]
    fn sinks_produce_no_entry() {
        let g = Graph::from_edges([edge(1, 2, 1.0)]);
        let map = influence_map(&g, 10.0);
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn disconnected_components_stay_separate() {
        let g = Graph::from_edges([edge(1, 2, 1.0), edge(3, 4, 1.0)]);
        let map = influence_map(&g, 10.0);
        assert_eq!(map[&1], set(&[1, 2]));
        assert_eq!(map[&3], set(&[3, 4]));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let g = Graph::from_edges([
            edge(1, 2, 1.0),
            edge(2, 3, 1.0),
            edge(1, 3, 5.0),
            edge(3, 4, 0.5),
            edge(5, 1, 2.0),
        ]);
        for deadline in [-1.0, 0.0, 1.5, 3.0, 10.0] {
            assert_eq!(influence_map_parallel(&g, deadline), influence_map(&g, deadline));
        }
    }
}
