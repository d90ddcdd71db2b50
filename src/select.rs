//! Greedy top-1 / top-2 influencer selection.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use crate::error::InfluenceError;
use crate::graph::NodeId;
use crate::spread::InfluenceMap;

/// The node with the largest influencee set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopInfluencer {
    pub node: NodeId,
    pub spread: usize,
    pub influencees: HashSet<NodeId>,
}

/// The node adding the most reach on top of an earlier pick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarginalInfluencer {
    pub node: NodeId,
    /// Influencees not already covered by the earlier pick.
    pub marginal_spread: usize,
    /// The candidate's full (non-marginal) spread.
    pub spread: usize,
    pub influencees: HashSet<NodeId>,
    pub marginal_influencees: HashSet<NodeId>,
}

/// Pick the influencer with the largest spread.
///
/// Ties prefer the smaller node id, and the rule is applied over a full scan
/// of the map, so the result is independent of iteration order. An empty map
/// fails with [`InfluenceError::NoInfluencer`].
pub fn top_influencer(influence: &InfluenceMap) -> Result<TopInfluencer, InfluenceError> {
    let started = Instant::now();
    let mut best: Option<(NodeId, &HashSet<NodeId>)> = None;
    for (&node, influencees) in influence {
        let replace = match best {
            None => true,
            Some((best_node, best_set)) => {
                influencees.len() > best_set.len()
                    || (influencees.len() == best_set.len() && node < best_node)
            }
        };
        if replace {
            best = Some((node, influencees));
        }
    }
    let (node, influencees) = best.ok_or(InfluenceError::NoInfluencer)?;
    debug!(
        node,
        spread = influencees.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "top-1 selected"
    );
    Ok(TopInfluencer { node, spread: influencees.len(), influencees: influencees.clone() })
}

/// Pick the influencer with the largest marginal spread beyond `covered`
/// (the influencee set of the earlier pick).
///
/// Scoring is driven by marginal reach, never raw spread. A candidate whose
/// reach is fully covered can never win, which keeps the earlier pick
/// eligible but harmless. Same smallest-id tie-break as [`top_influencer`];
/// fails with [`InfluenceError::NoMarginalInfluencer`] when no candidate
/// adds anything.
pub fn marginal_influencer(
    influence: &InfluenceMap,
    covered: &HashSet<NodeId>,
) -> Result<MarginalInfluencer, InfluenceError> {
    let started = Instant::now();
    let mut best: Option<(NodeId, usize, &HashSet<NodeId>)> = None;
    for (&node, influencees) in influence {
        let marginal = influencees.difference(covered).count();
        if marginal == 0 {
            continue;
        }
        let replace = match best {
            None => true,
            Some((best_node, best_marginal, _)) => {
                marginal > best_marginal || (marginal == best_marginal && node < best_node)
            }
        };
        if replace {
            best = Some((node, marginal, influencees));
        }
    }
    let (node, marginal_spread, influencees) =
        best.ok_or(InfluenceError::NoMarginalInfluencer)?;
    let marginal_influencees: HashSet<NodeId> =
        influencees.difference(covered).copied().collect();
    debug!(
        node,
        marginal_spread,
        spread = influencees.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "top-2 selected"
    );
    Ok(MarginalInfluencer {
        node,
        marginal_spread,
        spread: influencees.len(),
        influencees: influencees.clone(),
        marginal_influencees,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spread::InfluenceMap;

    fn map(entries: &[(NodeId, &[NodeId])]) -> InfluenceMap {
        entries
            .iter()
            .map(|&(node, set)| (node, set.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn largest_spread_wins() {
        let influence = map(&[(1, &[1, 2]), (2, &[2, 3, 4]), (3, &[3])]);
        let top = top_influencer(&influence).unwrap();
        assert_eq!(top.node, 2);
        assert_eq!(top.spread, 3);
    }

    #[test]
    fn spread_tie_prefers_smaller_id() {
        let influence = map(&[(7, &[7, 8]), (3, &[3, 4]), (5, &[5, 6])]);
        let top = top_influencer(&influence).unwrap();
        assert_eq!(top.node, 3);
        assert_eq!(top.spread, 2);
    }

    #[test]
    fn empty_map_is_an_error() {
        let influence = InfluenceMap::new();
        assert!(matches!(top_influencer(&influence), Err(InfluenceError::NoInfluencer)));
    }

    #[test]
    fn marginal_gain_beats_raw_spread() {
        // Covered = {2,3,4}. B (node 20) has raw spread 3 but marginal {5};
        // C (node 30) has raw spread 2, both covered. B must win on marginal
        // size 1 despite C existing, and raw spreads must not drive the pick.
        let covered: HashSet<NodeId> = [2, 3, 4].into_iter().collect();
        let influence = map(&[(10, &[2, 3, 4]), (20, &[3, 4, 5]), (30, &[3, 4])]);
        let second = marginal_influencer(&influence, &covered).unwrap();
        assert_eq!(second.node, 20);
        assert_eq!(second.marginal_spread, 1);
        assert_eq!(second.spread, 3);
        assert_eq!(second.marginal_influencees, [5].into_iter().collect());
    }

    #[test]
    fn marginal_tie_prefers_smaller_id() {
        let covered: HashSet<NodeId> = [1].into_iter().collect();
        let influence = map(&[(9, &[1, 2]), (4, &[1, 3])]);
        let second = marginal_influencer(&influence, &covered).unwrap();
        assert_eq!(second.node, 4);
        assert_eq!(second.marginal_spread, 1);
    }

    #[test]
    fn top_one_stays_eligible_but_never_wins() {
        // Node 1 is the top-1 pick; its marginal gain against its own set is
        // zero, so node 2 wins even with a single new node.
        let influence = map(&[(1, &[1, 2, 3]), (2, &[2, 4])]);
        let top = top_influencer(&influence).unwrap();
        assert_eq!(top.node, 1);
        let second = marginal_influencer(&influence, &top.influencees).unwrap();
        assert_eq!(second.node, 2);
        assert_eq!(second.marginal_influencees, [4].into_iter().collect());
    }

    #[test]
    fn fully_covered_candidates_are_an_error() {
        let covered: HashSet<NodeId> = [1, 2, 3].into_iter().collect();
        let influence = map(&[(1, &[1, 2]), (2, &[2, 3])]);
        assert!(matches!(
            marginal_influencer(&influence, &covered),
            Err(InfluenceError::NoMarginalInfluencer)
        ));
    }
}
