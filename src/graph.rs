use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Service-location identifier.
pub type NodeId = u32;

/// Passenger metadata attached to a service location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub pickup: String,
    pub destination: String,
}

/// Weighted undirected graph of service locations.
///
/// Nodes exist implicitly once an edge references them. Parallel edges and
/// self-loops are stored verbatim; `add_edge` inserts the symmetric entry on
/// both endpoints. The graph is populated once and treated as read-only
/// during queries.
#[derive(Debug, Default)]
pub struct Graph {
    adjacency: FxHashMap<NodeId, Vec<(NodeId, u32)>>,
    passengers: FxHashMap<NodeId, Passenger>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge with the given weight.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: u32) {
        self.adjacency.entry(u).or_default().push((v, weight));
        self.adjacency.entry(v).or_default().push((u, weight));
        self.edge_count += 1;
    }

    /// Attach passenger metadata to a node, replacing any prior record.
    pub fn add_passenger(&mut self, node: NodeId, passenger: Passenger) {
        self.passengers.insert(node, passenger);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Adjacency entries of `node`; empty when the node is unknown.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, u32)] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn passenger(&self, node: NodeId) -> Option<&Passenger> {
        self.passengers.get(&node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges; parallel edges count individually.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Node ids in ascending order.
    pub fn sorted_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Every undirected edge exactly once, reported from its smaller
    /// endpoint in ascending source order. Self-loops are skipped: the
    /// symmetric adjacency gives them no single canonical entry.
    pub fn unique_edges(&self) -> Vec<(NodeId, NodeId, u32)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in self.sorted_nodes() {
            for &(v, w) in self.neighbors(u) {
                if u < v {
                    edges.push((u, v, w));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(name: &str) -> Passenger {
        Passenger {
            name: name.to_string(),
            pickup: "A St".to_string(),
            destination: "B Ave".to_string(),
        }
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 4);

        assert_eq!(g.neighbors(1), &[(2, 4)]);
        assert_eq!(g.neighbors(2), &[(1, 4)]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 4);
        g.add_edge(1, 2, 7);

        assert_eq!(g.neighbors(1), &[(2, 4), (2, 7)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let g = Graph::new();
        assert!(!g.contains(5));
        assert!(g.neighbors(5).is_empty());
    }

    #[test]
    fn test_passenger_last_write_wins() {
        let mut g = Graph::new();
        g.add_passenger(1, passenger("Alice"));
        g.add_passenger(1, passenger("Bob"));

        assert_eq!(g.passenger(1).map(|p| p.name.as_str()), Some("Bob"));
        assert!(g.passenger(2).is_none());
    }

    #[test]
    fn test_unique_edges_no_duplicates() {
        let mut g = Graph::new();
        g.add_edge(3, 1, 2);
        g.add_edge(1, 2, 4);
        g.add_edge(2, 3, 1);

        assert_eq!(g.unique_edges(), vec![(1, 2, 4), (1, 3, 2), (2, 3, 1)]);
    }

    #[test]
    fn test_unique_edges_skips_self_loops() {
        let mut g = Graph::new();
        g.add_edge(1, 1, 5);
        g.add_edge(1, 2, 3);

        assert_eq!(g.unique_edges(), vec![(1, 2, 3)]);
    }

    #[test]
    fn test_sorted_nodes_ascending() {
        let mut g = Graph::new();
        g.add_edge(10, 2, 1);
        g.add_edge(7, 10, 1);

        assert_eq!(g.sorted_nodes(), vec![2, 7, 10]);
    }
}
