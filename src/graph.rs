//! Directed weighted adjacency construction and edge-list parsing.

use std::collections::HashMap;

use crate::error::InfluenceError;

/// Node identifier. Ids are opaque and need not be dense; edge-list files
/// sometimes carry them as floats (`12.0`) and the parser truncates.
pub type NodeId = u64;

/// A directed edge `source -> target` whose weight is the time influence
/// takes to travel along it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Directed weighted graph keyed by source node.
///
/// Only nodes with at least one outgoing edge appear as top-level keys; a
/// pure sink is representable only as a neighbor. Duplicate
/// `(source, target)` pairs keep the weight supplied last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adj: HashMap<NodeId, HashMap<NodeId, f64>>,
}

impl Graph {
    /// Build the adjacency map from an edge sequence in a single pass.
    ///
    /// Weight signs are not validated here; callers feeding untrusted input
    /// should run [`Graph::validate_nonnegative`] before computing shortest
    /// paths.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut adj: HashMap<NodeId, HashMap<NodeId, f64>> = HashMap::new();
        for edge in edges {
            adj.entry(edge.source).or_default().insert(edge.target, edge.weight);
        }
        Self { adj }
    }

    /// Import a directed petgraph with `f64` edge weights, using node indices
    /// as ids. Parallel edges collapse last-write-wins like any other input.
    #[cfg(feature = "petgraph")]
    pub fn from_petgraph<N, Ix>(graph: &petgraph::Graph<N, f64, petgraph::Directed, Ix>) -> Self
    where
        Ix: petgraph::graph::IndexType,
    {
        use petgraph::visit::EdgeRef;
        Self::from_edges(graph.edge_references().map(|e| Edge {
            source: e.source().index() as NodeId,
            target: e.target().index() as NodeId,
            weight: *e.weight(),
        }))
    }

    /// Nodes with at least one outgoing edge.
    pub fn sources(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.keys().copied()
    }

    /// Every node appearing as an edge target, anywhere in the graph.
    /// May yield duplicates; collect into a map or set to dedup.
    pub fn targets(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.values().flat_map(|nbrs| nbrs.keys().copied())
    }

    /// Outgoing neighbors of `node` with their edge weights, or `None` if
    /// the node has no outgoing edges.
    pub fn neighbors(&self, node: NodeId) -> Option<&HashMap<NodeId, f64>> {
        self.adj.get(&node)
    }

    pub fn source_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Reject graphs that violate the shortest-path precondition.
    ///
    /// A negative (or NaN) weight makes every downstream distance suspect,
    /// so this fails on the first offending edge instead of letting the
    /// engine miscompute.
    pub fn validate_nonnegative(&self) -> Result<(), InfluenceError> {
        for (&source, nbrs) in &self.adj {
            for (&target, &weight) in nbrs {
                if !(weight >= 0.0) {
                    return Err(InfluenceError::NegativeWeight { source_node: source, target, weight });
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

/// Parse a whitespace-separated edge list: one `source target weight` triple
/// per line. Blank lines and lines starting with `#` are skipped.
///
/// Node id fields may be written as floats and are truncated to integer ids;
/// negative or non-finite id fields are malformed. Fails on the first bad
/// line with [`InfluenceError::MalformedEdge`].
pub fn parse_edge_list(text: &str) -> Result<Vec<Edge>, InfluenceError> {
    let mut edges = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(InfluenceError::MalformedEdge {
                line: idx + 1,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        }
        edges.push(Edge {
            source: parse_node(fields[0], idx + 1)?,
            target: parse_node(fields[1], idx + 1)?,
            weight: parse_number(fields[2], idx + 1)?,
        });
    }
    Ok(edges)
}

fn parse_number(field: &str, line: usize) -> Result<f64, InfluenceError> {
    field.parse().map_err(|_| InfluenceError::MalformedEdge {
        line,
        reason: format!("non-numeric field {field:?}"),
    })
}

fn parse_node(field: &str, line: usize) -> Result<NodeId, InfluenceError> {
    let value = parse_number(field, line)?;
    if !value.is_finite() || value < 0.0 {
        return Err(InfluenceError::MalformedEdge {
            line,
            reason: format!("invalid node id {field:?}"),
        });
    }
    Ok(value as NodeId)
}
