//! Greedy nearest-neighbor tour construction.

use crate::error::{Result, RouteError};
use crate::matrix::DistanceMatrix;

/// Order every matrix position into a visiting sequence, starting at
/// position 0.
///
/// Deterministic greedy scan: from the current stop, pick the unvisited
/// position with the strictly smallest finite distance; the lowest index
/// wins among equal minima. Empty and single-entry matrices yield trivial
/// tours. If every remaining stop is unreachable from the current one the
/// tour cannot continue, and `NoFeasibleTour` names the stop it got stuck
/// at; an invalid stop is never emitted into the tour.
pub fn nearest_neighbor_tour(matrix: &DistanceMatrix) -> Result<Vec<usize>> {
    let n = matrix.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = 0usize;
    visited[current] = true;
    tour.push(current);

    for _ in 1..n {
        let mut next: Option<(usize, u64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            if let Some(cost) = matrix.cost(current, candidate) {
                let better = match next {
                    Some((_, best)) => cost < best,
                    None => true,
                };
                if better {
                    next = Some((candidate, cost));
                }
            }
        }

        match next {
            Some((candidate, _)) => {
                visited[candidate] = true;
                tour.push(candidate);
                current = candidate;
            }
            None => {
                return Err(RouteError::NoFeasibleTour {
                    at: matrix.node(current),
                    remaining: n - tour.len(),
                })
            }
        }
    }

    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    /// Helper: matrix from rows of finite costs, `None` for unreachable.
    /// Node ids are 100 + position so errors are distinguishable from
    /// indices.
    fn matrix(rows: &[&[Option<u64>]]) -> DistanceMatrix {
        let n = rows.len();
        let mut flat = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "matrix must be square");
            flat.extend_from_slice(row);
        }
        let nodes: Vec<NodeId> = (0..n as NodeId).map(|i| 100 + i).collect();
        DistanceMatrix::from_parts(nodes, flat)
    }

    #[test]
    fn test_empty_matrix_yields_empty_tour() {
        let m = matrix(&[]);
        assert_eq!(nearest_neighbor_tour(&m).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_single_entry_yields_singleton() {
        let m = matrix(&[&[Some(0)]]);
        assert_eq!(nearest_neighbor_tour(&m).unwrap(), vec![0]);
    }

    #[test]
    fn test_greedy_picks_nearest_each_step() {
        // From 0: nearest is 2 (cost 2). From 2: nearest unvisited is 1.
        let m = matrix(&[
            &[Some(0), Some(3), Some(2)],
            &[Some(3), Some(0), Some(1)],
            &[Some(2), Some(1), Some(0)],
        ]);

        assert_eq!(nearest_neighbor_tour(&m).unwrap(), vec![0, 2, 1]);
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // 1 and 2 are both at cost 5 from 0; the scan keeps the first.
        let m = matrix(&[
            &[Some(0), Some(5), Some(5)],
            &[Some(5), Some(0), Some(9)],
            &[Some(5), Some(9), Some(0)],
        ]);

        assert_eq!(nearest_neighbor_tour(&m).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_tour_is_permutation_starting_at_zero() {
        let m = matrix(&[
            &[Some(0), Some(9), Some(4), Some(7)],
            &[Some(9), Some(0), Some(3), Some(6)],
            &[Some(4), Some(3), Some(0), Some(8)],
            &[Some(7), Some(6), Some(8), Some(0)],
        ]);

        let tour = nearest_neighbor_tour(&m).unwrap();
        assert_eq!(tour[0], 0);
        let mut sorted = tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unreachable_remainder_is_an_error() {
        // 1 is reachable from 0, but 2 is reachable from neither.
        let m = matrix(&[
            &[Some(0), Some(4), None],
            &[Some(4), Some(0), None],
            &[None, None, Some(0)],
        ]);

        assert_eq!(
            nearest_neighbor_tour(&m),
            Err(RouteError::NoFeasibleTour {
                at: 101,
                remaining: 1
            })
        );
    }
}
