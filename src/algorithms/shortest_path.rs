//! Shortest path algorithms: Dijkstra's algorithm
//!
//! Provides shortest path computation for weighted digraphs:
//! - `shortest_paths`: Single-source distances and predecessors
//! - `reconstruct`: Source-to-destination path from a predecessor array
//!
//! # Example
//!
//! ```
//! use pathladder::{shortest_paths, Graph, VertexId};
//!
//! let edges = vec![
//!     (VertexId(0), VertexId(1), 4),
//!     (VertexId(0), VertexId(2), 1),
//!     (VertexId(2), VertexId(1), 1),
//! ];
//! let graph = Graph::from_edge_list(&edges);
//!
//! let result = shortest_paths(&graph, VertexId(0));
//! assert_eq!(result.distances, vec![0, 2, 1]);
//! assert_eq!(result.path_to(VertexId(1)), vec![VertexId(0), VertexId(2), VertexId(1)]);
//! ```

use crate::storage::{Graph, VertexId};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, warn};

/// Distance of a vertex the source cannot reach
pub const INFINITY: u64 = u64::MAX;

/// State for Dijkstra's priority queue
#[derive(Clone, Copy, PartialEq, Eq)]
struct State {
    cost: u64,
    vertex: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Output of a single-source run
///
/// `distances[v]` is `INFINITY` and `previous[v]` is `None` for every vertex
/// the source cannot reach. `previous[source]` is also `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// Minimal total weight from the source, per vertex
    pub distances: Vec<u64>,
    /// Predecessor on a shortest path, per vertex
    pub previous: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    /// Distance to `vertex`, or `None` if unreachable or out of range
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<u64> {
        self.distances
            .get(vertex.index())
            .copied()
            .filter(|&d| d != INFINITY)
    }

    /// Shortest path from the source to `destination` (empty if unreachable)
    #[must_use]
    pub fn path_to(&self, destination: VertexId) -> Vec<VertexId> {
        reconstruct(&self.distances, &self.previous, destination)
    }
}

/// Compute single-source shortest paths using Dijkstra's algorithm
///
/// Stale heap entries are discarded through the visited check instead of a
/// decrease-key operation.
///
/// # Arguments
///
/// * `graph` - Weighted digraph (weights are non-negative by type)
/// * `source` - The starting vertex
///
/// # Returns
///
/// Distance and predecessor arrays of length `graph.num_vertices()`. An
/// out-of-range source yields all-`INFINITY` distances and no predecessors.
///
/// # Complexity
///
/// O((V + E) log V) using a binary heap
#[must_use]
pub fn shortest_paths(graph: &Graph, source: VertexId) -> ShortestPaths {
    let n = graph.num_vertices();
    let mut distances = vec![INFINITY; n];
    let mut previous = vec![None; n];

    if n == 0 {
        return ShortestPaths {
            distances,
            previous,
        };
    }

    let source_idx = source.index();
    if source_idx >= n {
        warn!(
            source = source.0,
            num_vertices = n,
            "source vertex out of range, no paths computed"
        );
        return ShortestPaths {
            distances,
            previous,
        };
    }

    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    distances[source_idx] = 0;
    heap.push(State {
        cost: 0,
        vertex: source_idx,
    });

    while let Some(State { vertex: u, .. }) = heap.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;

        let base = distances[u];
        if base == INFINITY {
            continue;
        }

        #[allow(clippy::cast_possible_truncation)] // u < n, and n fits in u32 ids
        let u_id = VertexId(u as u32);
        for edge in graph.edges(u_id) {
            let v = edge.destination.index();
            if v >= n || visited[v] {
                continue;
            }

            let next_cost = base.saturating_add(u64::from(edge.weight));
            if next_cost < distances[v] {
                distances[v] = next_cost;
                previous[v] = Some(u_id);
                heap.push(State {
                    cost: next_cost,
                    vertex: v,
                });
            }
        }
    }

    debug!(
        source = source.0,
        reached = visited.iter().filter(|&&seen| seen).count(),
        num_vertices = n,
        "dijkstra finished"
    );

    ShortestPaths {
        distances,
        previous,
    }
}

/// Walk the predecessor array back from `destination`
///
/// # Returns
///
/// The vertices from source to `destination` inclusive, or an empty path if
/// the destination is out of range or unreachable. A predecessor chain that
/// runs longer than the number of vertices (a cycle) or leaves the arrays is
/// reported and yields an empty path.
#[must_use]
pub fn reconstruct(
    distances: &[u64],
    previous: &[Option<VertexId>],
    destination: VertexId,
) -> Vec<VertexId> {
    let idx = destination.index();
    if idx >= distances.len() || idx >= previous.len() {
        return Vec::new();
    }

    if distances[idx] == INFINITY {
        return Vec::new();
    }

    let mut path = vec![destination];
    let mut current = destination;
    let max_steps = distances.len();

    loop {
        let Some(&step) = previous.get(current.index()) else {
            warn!(
                vertex = current.0,
                "predecessor outside distance array, discarding path"
            );
            return Vec::new();
        };
        let Some(pred) = step else {
            break;
        };

        if path.len() >= max_steps {
            warn!(
                destination = destination.0,
                max_steps, "predecessor chain does not terminate, discarding path"
            );
            return Vec::new();
        }

        path.push(pred);
        current = pred;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(u32, u32, u32)]) -> Graph {
        let edges: Vec<_> = edges
            .iter()
            .map(|&(s, d, w)| (VertexId(s), VertexId(d), w))
            .collect();
        Graph::from_edge_list(&edges)
    }

    #[test]
    fn test_empty_graph() {
        let result = shortest_paths(&Graph::new(), VertexId(0));
        assert!(result.distances.is_empty());
        assert!(result.previous.is_empty());
    }

    #[test]
    fn test_single_edge() {
        let result = shortest_paths(&graph(&[(0, 1, 5)]), VertexId(0));
        assert_eq!(result.distances, vec![0, 5]);
        assert_eq!(result.previous, vec![None, Some(VertexId(0))]);
    }

    #[test]
    fn test_shorter_path_via_intermediate() {
        // Direct: 0 --4--> 1
        // Via 2:  0 --1--> 2 --1--> 1 (total: 2)
        let result = shortest_paths(&graph(&[(0, 1, 4), (0, 2, 1), (2, 1, 1)]), VertexId(0));

        assert_eq!(result.distances, vec![0, 2, 1]);
        assert_eq!(
            result.path_to(VertexId(1)),
            vec![VertexId(0), VertexId(2), VertexId(1)]
        );
    }

    #[test]
    fn test_unreachable_vertex() {
        // 0 → 1, 2 → 3 (disconnected)
        let result = shortest_paths(&graph(&[(0, 1, 1), (2, 3, 1)]), VertexId(0));

        assert_eq!(result.distances[3], INFINITY);
        assert_eq!(result.previous[3], None);
        assert!(result.path_to(VertexId(3)).is_empty());
        assert_eq!(result.distance(VertexId(3)), None);
        assert_eq!(result.distance(VertexId(1)), Some(1));
    }

    #[test]
    fn test_source_path_is_itself() {
        let result = shortest_paths(&graph(&[(0, 1, 1)]), VertexId(0));
        assert_eq!(result.path_to(VertexId(0)), vec![VertexId(0)]);
    }

    #[test]
    fn test_diamond_shortest_path() {
        //     1
        //    / \
        //   0   3  (1→3: 1, 2→3: 5)
        //    \ /
        //     2
        let result = shortest_paths(
            &graph(&[(0, 1, 1), (0, 2, 2), (1, 3, 1), (2, 3, 5)]),
            VertexId(0),
        );

        assert_eq!(result.distances[3], 2);
        assert_eq!(
            result.path_to(VertexId(3)),
            vec![VertexId(0), VertexId(1), VertexId(3)]
        );
    }

    #[test]
    fn test_cycle_in_graph() {
        // Cycle: 0 → 1 → 2 → 0, with 0 → 3
        let result = shortest_paths(
            &graph(&[(0, 1, 1), (1, 2, 1), (2, 0, 1), (0, 3, 10)]),
            VertexId(0),
        );
        assert_eq!(result.distances, vec![0, 1, 2, 10]);
        assert_eq!(result.previous[0], None);
    }

    #[test]
    fn test_source_out_of_bounds() {
        let result = shortest_paths(&graph(&[(0, 1, 1)]), VertexId(100));

        assert_eq!(result.distances, vec![INFINITY, INFINITY]);
        assert_eq!(result.previous, vec![None, None]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let result = shortest_paths(&graph(&[(0, 1, 0), (1, 2, 0)]), VertexId(0));
        assert_eq!(result.distances, vec![0, 0, 0]);
        assert_eq!(
            result.path_to(VertexId(2)),
            vec![VertexId(0), VertexId(1), VertexId(2)]
        );
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let result = shortest_paths(&graph(&[(0, 1, 9), (0, 1, 3)]), VertexId(0));
        assert_eq!(result.distances, vec![0, 3]);
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let result = shortest_paths(
            &graph(&[(0, 1, u32::MAX), (1, 2, u32::MAX)]),
            VertexId(0),
        );
        assert_eq!(result.distances[2], 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_reconstruct_invalid_queries() {
        assert!(reconstruct(&[], &[], VertexId(0)).is_empty());
        assert!(reconstruct(&[0], &[None], VertexId(5)).is_empty());
        assert!(reconstruct(&[0, INFINITY], &[None, None], VertexId(1)).is_empty());
    }

    #[test]
    fn test_reconstruct_detects_cycle() {
        // 1 ↔ 2 point at each other, neither reaches a `None`
        let distances = [0, 1, 2];
        let previous = [None, Some(VertexId(2)), Some(VertexId(1))];

        assert!(reconstruct(&distances, &previous, VertexId(1)).is_empty());
    }

    #[test]
    fn test_reconstruct_predecessor_out_of_range() {
        let distances = [0, 1];
        let previous = [None, Some(VertexId(7))];

        assert!(reconstruct(&distances, &previous, VertexId(1)).is_empty());
    }

    #[test]
    fn test_reconstruct_from_arrays() {
        let distances = [0, 2, 1];
        let previous = [None, Some(VertexId(2)), Some(VertexId(0))];

        assert_eq!(
            reconstruct(&distances, &previous, VertexId(1)),
            vec![VertexId(0), VertexId(2), VertexId(1)]
        );
    }
}
