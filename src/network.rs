//! Network file loading.
//!
//! A network file is the JSON boundary through which static data enters the
//! planner: a list of `[u, v, weight]` edge triples and a list of passenger
//! records keyed by node id.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::graph::{Graph, NodeId, Passenger};

#[derive(Debug, Deserialize)]
struct NetworkFile {
    edges: Vec<(NodeId, NodeId, u32)>,
    #[serde(default)]
    passengers: Vec<PassengerRecord>,
}

#[derive(Debug, Deserialize)]
struct PassengerRecord {
    node: NodeId,
    name: String,
    pickup: String,
    destination: String,
}

/// Load a network file and populate a graph from it.
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read network file {}", path.display()))?;
    let network: NetworkFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse network file {}", path.display()))?;

    let mut graph = Graph::new();
    for (u, v, weight) in network.edges {
        graph.add_edge(u, v, weight);
    }
    let passenger_count = network.passengers.len();
    for record in network.passengers {
        graph.add_passenger(
            record.node,
            Passenger {
                name: record.name,
                pickup: record.pickup,
                destination: record.destination,
            },
        );
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        passengers = passenger_count,
        "loaded network"
    );
    Ok(graph)
}
