//! Graph storage layer
//!
//! Provides the CSR weighted digraph and its line-oriented text loader.

pub mod graph;
pub mod text;

pub use graph::{Edge, Graph, VertexId, Weight};
