//! Single-source shortest path engine.
//!
//! Classic Dijkstra over the adjacency store with a `BinaryHeap` min-frontier
//! keyed by tentative distance. A node may sit in the frontier several times
//! with different tentative distances; stale entries are skipped by comparing
//! the popped cost against the recorded tentative distance, so only the
//! relaxation that set the current distance wins when the node is dequeued.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::error::{Result, RouteError};
use crate::graph::{Graph, NodeId};

/// Compute the shortest path from `src` to `dst`, inclusive of both
/// endpoints.
///
/// Returns `NodeNotFound` when either endpoint is absent from the graph, and
/// an empty path when `dst` is unreachable from `src`. `src == dst` yields
/// the single-element path. Equal-cost frontier entries expand in ascending
/// node id order, so results are deterministic. Self-loops and parallel
/// edges pass through the ordinary relaxation step.
pub fn shortest_path(graph: &Graph, src: NodeId, dst: NodeId) -> Result<Vec<NodeId>> {
    if !graph.contains(src) {
        return Err(RouteError::NodeNotFound(src));
    }
    if !graph.contains(dst) {
        return Err(RouteError::NodeNotFound(dst));
    }
    if src == dst {
        return Ok(vec![src]);
    }

    // Tentative distances; absence means "not yet reached" (infinite).
    let mut dist: FxHashMap<NodeId, u64> = FxHashMap::default();
    let mut parent: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut frontier: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();

    dist.insert(src, 0);
    frontier.push(Reverse((0, src)));

    while let Some(Reverse((cost, node))) = frontier.pop() {
        // Stale entry: a cheaper relaxation already claimed this node.
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        if node == dst {
            break;
        }

        for &(next, weight) in graph.neighbors(node) {
            let candidate = cost + u64::from(weight);
            let improved = match dist.get(&next) {
                Some(&best) => candidate < best,
                None => true,
            };
            if improved {
                dist.insert(next, candidate);
                parent.insert(next, node);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    if !dist.contains_key(&dst) {
        return Ok(Vec::new());
    }

    // Walk predecessor links back to the source, then flip.
    let mut path = vec![dst];
    let mut current = dst;
    while let Some(&prev) = parent.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Ok(path)
}

/// Total weight along `path`, taking the minimum-weight parallel edge for
/// each consecutive hop.
///
/// Returns `None` for an empty path or a hop with no connecting edge. For
/// engine-produced paths the result equals the Dijkstra total, since the
/// relaxation step only ever uses the cheapest parallel edge.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Option<u64> {
    if path.is_empty() {
        return None;
    }
    let mut total: u64 = 0;
    for hop in path.windows(2) {
        let weight = graph
            .neighbors(hop[0])
            .iter()
            .filter(|&&(next, _)| next == hop[1])
            .map(|&(_, w)| w)
            .min()?;
        total += u64::from(weight);
    }
    Some(total)
}
