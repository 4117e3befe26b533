pub mod cli;
pub mod dijkstra;
pub mod error;
pub mod export;
pub mod graph;
pub mod matrix;
pub mod network;
pub mod plan;
pub mod tour;

pub use dijkstra::{path_cost, shortest_path};
pub use error::{Result, RouteError};
pub use graph::{Graph, NodeId, Passenger};
pub use matrix::DistanceMatrix;
pub use network::load_network;
pub use plan::plan_route;
pub use tour::nearest_neighbor_tour;
