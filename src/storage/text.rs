//! Text I/O for weighted digraphs
//!
//! # Format
//!
//! ```text
//! 3          <- optional header: declared vertex count
//! 0 1 4      <- source destination weight
//! 0 2 1
//! 2 1 1
//! ```
//!
//! Without a header the vertex count is the largest id seen plus one, and
//! edges touching ids far beyond the edge count are dropped (see
//! [`Graph::from_edge_list`]). With a header, edges touching ids outside the declared range are dropped. Blank
//! lines and lines starting with `#` are ignored. Any other line that does not
//! parse is skipped with a warning.

use super::{Graph, VertexId, Weight};
use crate::error::{LineError, LoadError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

impl Graph {
    /// Read graph from a text file
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be opened or read. Malformed
    /// lines are not errors.
    pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let graph = Self::from_text(BufReader::new(file)).map_err(io_err)?;

        debug!(
            path = %path.display(),
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Parse graph from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails.
    pub fn from_text<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut builder = TextGraphBuilder::default();
        for (idx, line) in reader.lines().enumerate() {
            builder.push_line(idx + 1, &line?);
        }
        Ok(builder.finish())
    }

    /// Parse graph from an in-memory string
    #[must_use]
    pub fn parse_text(text: &str) -> Self {
        let mut builder = TextGraphBuilder::default();
        for (idx, line) in text.lines().enumerate() {
            builder.push_line(idx + 1, line);
        }
        builder.finish()
    }
}

#[derive(Default)]
struct TextGraphBuilder {
    declared: Option<usize>,
    seen_content: bool,
    edges: Vec<(VertexId, VertexId, Weight)>,
}

impl TextGraphBuilder {
    fn push_line(&mut self, line_no: usize, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        let first_content = !self.seen_content;
        self.seen_content = true;

        // A lone integer on the first content line is the vertex count header
        if first_content && trimmed.split_whitespace().count() == 1 {
            match parse_field::<usize>("vertex count", trimmed) {
                Ok(n) => self.declared = Some(n),
                Err(err) => warn!(line = line_no, %err, "skipping malformed header"),
            }
            return;
        }

        match self.parse_edge(trimmed) {
            Ok(edge) => self.edges.push(edge),
            Err(err) => warn!(line = line_no, %err, "skipping malformed edge line"),
        }
    }

    fn parse_edge(&self, line: &str) -> Result<(VertexId, VertexId, Weight), LineError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [src, dst, weight] = fields[..] else {
            return Err(LineError::FieldCount(fields.len()));
        };

        let src = parse_field::<u32>("source", src)?;
        let dst = parse_field::<u32>("destination", dst)?;
        let weight = parse_field::<Weight>("weight", weight)?;

        if let Some(num_vertices) = self.declared {
            for vertex in [src, dst] {
                if vertex as usize >= num_vertices {
                    return Err(LineError::OutOfRange {
                        vertex,
                        num_vertices,
                    });
                }
            }
        }

        Ok((VertexId(src), VertexId(dst), weight))
    }

    fn finish(self) -> Graph {
        match self.declared {
            Some(n) => Graph::with_vertices(n, &self.edges),
            None => Graph::from_edge_list(&self.edges),
        }
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, LineError> {
    value.parse().map_err(|_| LineError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
