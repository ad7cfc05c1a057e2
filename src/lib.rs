//! pathladder: shortest paths and word ladders
//!
//! # Overview
//!
//! Two independent searches:
//!
//! - **Shortest paths**: Dijkstra over a weighted digraph, producing distance
//!   and predecessor arrays, plus path reconstruction.
//! - **Word ladders**: breadth-first search over a dictionary where two words
//!   are linked when they are exactly one edit apart.
//!
//! # Quick Start
//!
//! ```
//! use pathladder::{shortest_ladder, shortest_paths, Dictionary, Graph, VertexId};
//!
//! let graph = Graph::parse_text("0 1 4\n0 2 1\n2 1 1\n");
//! let paths = shortest_paths(&graph, VertexId(0));
//! assert_eq!(paths.distances, vec![0, 2, 1]);
//! assert_eq!(paths.path_to(VertexId(1)), vec![VertexId(0), VertexId(2), VertexId(1)]);
//!
//! let dict = Dictionary::parse("cat cot cog dog dot");
//! assert_eq!(shortest_ladder("cat", "dog", &dict).len(), 4);
//! ```
//!
//! # Architecture
//!
//! - **Storage**: CSR digraph with a line-oriented text loader
//! - **Dictionary**: lowercase word set bucketed by length
//! - **Algorithms**: binary-heap Dijkstra, two-pointer edit predicates, BFS ladders
//! - **Output**: plain-text reports used by the `pathladder` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod output;
pub mod storage;

// Re-export core types
pub use algorithms::{
    adjacent, edit_distance_within, reconstruct, shortest_ladder, shortest_paths, ShortestPaths,
    INFINITY,
};
pub use dictionary::Dictionary;
pub use error::{LineError, LoadError};
pub use output::{format_ladder, format_path, format_shortest_paths};
pub use storage::{Edge, Graph, VertexId, Weight};
