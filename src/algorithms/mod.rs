//! Search algorithms (Dijkstra shortest paths, BFS word ladders)
//!
//! Every entry point is a pure function of its inputs: per-call state lives on
//! the stack, so independent calls can run concurrently over a shared graph or
//! dictionary.

pub mod edit;
pub mod ladder;
pub mod shortest_path;

pub use edit::{adjacent, edit_distance_within};
pub use ladder::shortest_ladder;
pub use shortest_path::{reconstruct, shortest_paths, ShortestPaths, INFINITY};
