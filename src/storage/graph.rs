//! CSR (Compressed Sparse Row) weighted digraph
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 → 1 (4), 0 → 2 (1), 2 → 1 (1)
//!
//! CSR:
//!   row_offsets: [0, 2, 2, 3]  // Vertex 0: edges [0..2), vertex 1: [2..2), vertex 2: [2..3)
//!   targets:     [1, 2, 1]
//!   weights:     [4, 1, 1]
//! ```
//!
//! Edges keep the order they were supplied in for each source vertex.

use tracing::warn;

/// Smallest vertex range `from_edge_list` will always accept
pub const MIN_INFERRED_LIMIT: usize = 1 << 16;

/// Non-negative edge cost
pub type Weight = u32;

/// Vertex identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Position of this vertex in per-vertex arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outgoing edge of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Edge target
    pub destination: VertexId,
    /// Cost of traversing the edge
    pub weight: Weight,
}

/// Weighted directed graph in CSR layout
///
/// # Example
///
/// ```
/// use pathladder::{Graph, VertexId};
///
/// let graph = Graph::from_edge_list(&[
///     (VertexId(0), VertexId(1), 4),
///     (VertexId(0), VertexId(2), 1),
/// ]);
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.edges(VertexId(0)).count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// Vertex i's edges live in `targets[row_offsets[i]..row_offsets[i + 1]]`
    /// Length: `num_vertices` + 1
    row_offsets: Vec<u32>,

    /// Edge targets
    /// Length: `num_edges`
    targets: Vec<u32>,

    /// Edge weights, parallel to `targets`
    /// Length: `num_edges`
    weights: Vec<Weight>,

    num_vertices: usize,
}

impl Graph {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            row_offsets: vec![0],
            targets: Vec::new(),
            weights: Vec::new(),
            num_vertices: 0,
        }
    }

    /// Create graph from edge list
    ///
    /// The vertex count is inferred as the largest id seen plus one. Ids are
    /// expected to be dense: `E` edges touch at most `2E` distinct vertices, so
    /// ids at or above [`Graph::inferred_limit`] cannot belong to a dense
    /// numbering. Edges touching them are skipped with a warning instead of
    /// sizing the graph after a stray id.
    ///
    /// # Arguments
    ///
    /// * `edges` - List of (source, destination, weight) tuples
    #[must_use]
    pub fn from_edge_list(edges: &[(VertexId, VertexId, Weight)]) -> Self {
        let limit = Self::inferred_limit(edges.len());
        let num_vertices = edges
            .iter()
            .flat_map(|(src, dst, _)| [src.index(), dst.index()])
            .filter(|&id| id < limit)
            .max()
            .map_or(0, |max| max + 1);

        Self::build(num_vertices, edges)
    }

    /// Largest vertex count `from_edge_list` infers for `num_edges` edges
    #[must_use]
    pub fn inferred_limit(num_edges: usize) -> usize {
        num_edges.saturating_mul(2).max(MIN_INFERRED_LIMIT)
    }

    /// Create graph with a fixed vertex count
    ///
    /// Edges whose source or destination lies outside `[0, num_vertices)` are
    /// skipped with a warning; construction never fails.
    #[must_use]
    pub fn with_vertices(num_vertices: usize, edges: &[(VertexId, VertexId, Weight)]) -> Self {
        Self::build(num_vertices, edges)
    }

    fn build(num_vertices: usize, edges: &[(VertexId, VertexId, Weight)]) -> Self {
        // Temporary adjacency lists, then flattened into CSR
        let mut adj_list: Vec<Vec<(u32, Weight)>> = vec![Vec::new(); num_vertices];

        for &(src, dst, weight) in edges {
            if src.index() >= num_vertices || dst.index() >= num_vertices {
                warn!(
                    source = src.0,
                    destination = dst.0,
                    num_vertices,
                    "skipping edge with out-of-range vertex"
                );
                continue;
            }
            adj_list[src.index()].push((dst.0, weight));
        }

        let mut row_offsets = Vec::with_capacity(num_vertices + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        let mut offset = 0_u32;
        row_offsets.push(offset);

        for neighbors in &adj_list {
            #[allow(clippy::cast_possible_truncation)] // Graphs >4B edges not supported
            let len_u32 = neighbors.len() as u32;
            offset += len_u32;
            row_offsets.push(offset);

            for &(target, weight) in neighbors {
                targets.push(target);
                weights.push(weight);
            }
        }

        Self {
            row_offsets,
            targets,
            weights,
            num_vertices,
        }
    }

    /// Outgoing edges of `vertex`, in insertion order
    ///
    /// Yields nothing for an out-of-range vertex.
    pub fn edges(&self, vertex: VertexId) -> impl Iterator<Item = Edge> + '_ {
        let (targets, weights) = self.adjacency(vertex);
        targets.iter().zip(weights).map(|(&target, &weight)| Edge {
            destination: VertexId(target),
            weight,
        })
    }

    /// Raw (targets, weights) slices for `vertex`; both empty when out of range
    #[must_use]
    pub fn adjacency(&self, vertex: VertexId) -> (&[u32], &[Weight]) {
        let idx = vertex.index();
        if idx >= self.num_vertices {
            return (&[], &[]);
        }

        let start = self.row_offsets[idx] as usize;
        let end = self.row_offsets[idx + 1] as usize;

        (&self.targets[start..end], &self.weights[start..end])
    }

    /// Get number of vertices
    #[must_use]
    pub const fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Get number of edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.targets.len()
    }

    /// Check whether `vertex` is a valid id for this graph
    #[must_use]
    pub const fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.num_vertices
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
