//! All-pairs distance matrix over a subset of service locations.
//!
//! The matrix is indexed by position in the node list it was built over, not
//! by node id. Entries are shortest-path totals; `None` marks an unreachable
//! pair. Construction runs one full shortest-path search per ordered pair
//! (O(n²) searches), which is the dominant cost of planning but fine for
//! stop lists in the tens.

use crate::dijkstra::{path_cost, shortest_path};
use crate::error::{Result, RouteError};
use crate::graph::{Graph, NodeId};

/// Square matrix of shortest-path totals, stored row-major over an owned
/// node list. The diagonal is always `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    nodes: Vec<NodeId>,
    costs: Vec<Option<u64>>,
}

impl DistanceMatrix {
    /// Build the matrix for `nodes` by querying the shortest-path engine for
    /// every ordered pair and summing edge weights along each returned path.
    ///
    /// Every listed node is validated up front: an unknown node fails the
    /// whole build with `NodeNotFound` rather than producing rows of
    /// meaningless unreachable entries.
    pub fn build(graph: &Graph, nodes: &[NodeId]) -> Result<Self> {
        for &node in nodes {
            if !graph.contains(node) {
                return Err(RouteError::NodeNotFound(node));
            }
        }

        let n = nodes.len();
        let mut costs = vec![None; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    costs[i * n + j] = Some(0);
                    continue;
                }
                let path = shortest_path(graph, nodes[i], nodes[j])?;
                costs[i * n + j] = path_cost(graph, &path);
            }
        }

        Ok(Self {
            nodes: nodes.to_vec(),
            costs,
        })
    }

    /// Matrix over the permuted node list selected by `order`, where
    /// `order[k]` names the existing position that becomes position `k`.
    ///
    /// Entries are copied from this matrix instead of re-running n² searches;
    /// the result is identical to a fresh build over the permuted list.
    pub fn reordered(&self, order: &[usize]) -> Self {
        let n = order.len();
        let mut nodes = Vec::with_capacity(n);
        let mut costs = vec![None; n * n];
        for (i, &oi) in order.iter().enumerate() {
            nodes.push(self.nodes[oi]);
            for (j, &oj) in order.iter().enumerate() {
                costs[i * n + j] = self.costs[oi * self.nodes.len() + oj];
            }
        }
        Self { nodes, costs }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at matrix position `i`.
    pub fn node(&self, i: usize) -> NodeId {
        self.nodes[i]
    }

    /// Shortest-path total between positions `i` and `j`; `None` when the
    /// pair is unreachable.
    pub fn cost(&self, i: usize, j: usize) -> Option<u64> {
        self.costs[i * self.nodes.len() + j]
    }

    #[cfg(test)]
    pub(crate) fn from_parts(nodes: Vec<NodeId>, costs: Vec<Option<u64>>) -> Self {
        assert_eq!(nodes.len() * nodes.len(), costs.len(), "matrix must be square");
        Self { nodes, costs }
    }
}
