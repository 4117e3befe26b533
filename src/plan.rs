//! Multi-stop route planning.
//!
//! Orders the requested stops with the nearest-neighbor heuristic over a
//! distance matrix, then stitches consecutive stops together with real
//! shortest paths, dropping the shared junction node at every seam so the
//! route is one flat node sequence.

use tracing::debug;

use crate::dijkstra::shortest_path;
use crate::error::{Result, RouteError};
use crate::graph::{Graph, NodeId};
use crate::matrix::DistanceMatrix;
use crate::tour::nearest_neighbor_tour;

/// Plan one continuous route visiting every requested passenger node.
///
/// The route runs the pickup leg in heuristic order, then a second,
/// independently ordered pass over the same stops for the drop-off leg.
/// Passenger records carry destination labels only, not destination nodes,
/// so both legs draw from the same node set.
///
/// Unknown nodes fail with `NodeNotFound`; a stop set the heuristic cannot
/// connect fails with `NoFeasibleTour`. Empty and single-node requests
/// return trivial routes. Segment boundaries are not preserved in the
/// output; callers that need them must track stops separately.
pub fn plan_route(graph: &Graph, passengers: &[NodeId]) -> Result<Vec<NodeId>> {
    match passengers {
        [] => return Ok(Vec::new()),
        &[only] => {
            if !graph.contains(only) {
                return Err(RouteError::NodeNotFound(only));
            }
            return Ok(vec![only]);
        }
        _ => {}
    }

    let matrix = DistanceMatrix::build(graph, passengers)?;
    let pickup_order = nearest_neighbor_tour(&matrix)?;
    let pickups: Vec<NodeId> = pickup_order.iter().map(|&i| matrix.node(i)).collect();
    debug!(?pickups, "pickup leg ordered");

    // Drop-off leg: the same stops, seen in pickup order. Its matrix is a
    // permutation of the pickup matrix, so no searches are repeated.
    let dropoff_matrix = matrix.reordered(&pickup_order);
    let dropoff_order = nearest_neighbor_tour(&dropoff_matrix)?;
    let dropoffs: Vec<NodeId> = dropoff_order
        .iter()
        .map(|&i| dropoff_matrix.node(i))
        .collect();
    debug!(?dropoffs, "drop-off leg ordered");

    let mut route = vec![pickups[0]];
    for leg in pickups.windows(2) {
        append_segment(graph, &mut route, leg[0], leg[1])?;
    }
    append_segment(graph, &mut route, pickups[pickups.len() - 1], dropoffs[0])?;
    for leg in dropoffs.windows(2) {
        append_segment(graph, &mut route, leg[0], leg[1])?;
    }

    Ok(route)
}

/// Append the shortest path from `from` to `to`, minus its first node (the
/// junction already sitting at the end of `route`). An unreachable pair
/// contributes nothing.
fn append_segment(
    graph: &Graph,
    route: &mut Vec<NodeId>,
    from: NodeId,
    to: NodeId,
) -> Result<()> {
    let segment = shortest_path(graph, from, to)?;
    route.extend(segment.into_iter().skip(1));
    Ok(())
}
