//! Serializable documents for the export and query boundaries.

use serde::Serialize;

use crate::error::{Result, RouteError};
use crate::graph::{Graph, NodeId, Passenger};

/// Snapshot of the full network: nodes in ascending id order with their
/// passenger records, and every undirected edge exactly once.
#[derive(Debug, Serialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger: Option<Passenger>,
}

#[derive(Debug, Serialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

impl GraphDocument {
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .sorted_nodes()
            .into_iter()
            .map(|id| NodeRecord {
                id,
                passenger: graph.passenger(id).cloned(),
            })
            .collect();
        let edges = graph
            .unique_edges()
            .into_iter()
            .map(|(source, target, weight)| EdgeRecord {
                source,
                target,
                weight,
            })
            .collect();
        Self { nodes, edges }
    }
}

/// Response document for a direct shortest-path query. An empty path means
/// the destination is unreachable.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub path: Vec<NodeId>,
}

/// Response document for a planned multi-passenger route.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub path: Vec<NodeId>,
    pub details: Vec<PassengerDetail>,
}

/// Per-passenger detail row, in request order.
#[derive(Debug, Serialize)]
pub struct PassengerDetail {
    pub node: NodeId,
    pub name: String,
    pub pickup: String,
    pub destination: String,
}

impl PlanResponse {
    /// Assemble the response for `route`, resolving each requested passenger
    /// node to its record. A node without a record is a `MissingPassenger`
    /// error, not an empty detail row.
    pub fn new(graph: &Graph, passengers: &[NodeId], route: Vec<NodeId>) -> Result<Self> {
        let details = passengers
            .iter()
            .map(|&node| {
                let record = graph
                    .passenger(node)
                    .ok_or(RouteError::MissingPassenger(node))?;
                Ok(PassengerDetail {
                    node,
                    name: record.name.clone(),
                    pickup: record.pickup.clone(),
                    destination: record.destination.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            path: route,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut g = Graph::new();
        g.add_edge(2, 1, 4);
        g.add_edge(1, 3, 2);
        g.add_edge(2, 3, 1);
        g.add_passenger(
            1,
            Passenger {
                name: "Alice Smith".to_string(),
                pickup: "123 Main St".to_string(),
                destination: "456 Park Ave".to_string(),
            },
        );
        g
    }

    #[test]
    fn test_graph_document_nodes_ascending_with_records() {
        let doc = GraphDocument::from_graph(&sample_graph());

        let ids: Vec<NodeId> = doc.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(doc.nodes[0].passenger.is_some());
        assert!(doc.nodes[1].passenger.is_none());
    }

    #[test]
    fn test_graph_document_edges_once_source_below_target() {
        let doc = GraphDocument::from_graph(&sample_graph());

        assert_eq!(doc.edges.len(), 3);
        for edge in &doc.edges {
            assert!(edge.source < edge.target);
        }
    }

    #[test]
    fn test_plan_response_details_in_request_order() {
        let mut g = sample_graph();
        g.add_passenger(
            3,
            Passenger {
                name: "Carol Williams".to_string(),
                pickup: "555 Maple Ave".to_string(),
                destination: "777 Elm St".to_string(),
            },
        );

        let response = PlanResponse::new(&g, &[3, 1], vec![3, 2, 1]).unwrap();
        let names: Vec<&str> = response.details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Carol Williams", "Alice Smith"]);
    }

    #[test]
    fn test_plan_response_missing_record_is_an_error() {
        let g = sample_graph();
        assert!(matches!(
            PlanResponse::new(&g, &[1, 2], vec![1, 3, 2]),
            Err(RouteError::MissingPassenger(2))
        ));
    }
}
