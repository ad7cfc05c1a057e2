//! Text rendering of shortest paths and word ladders

use crate::algorithms::ShortestPaths;
use crate::storage::VertexId;
use std::fmt::Write;

/// Render a path followed by its total cost
///
/// Every vertex is followed by a space, then the cost goes on its own line.
///
/// ```
/// use pathladder::{format_path, VertexId};
///
/// let path = [VertexId(0), VertexId(2), VertexId(1)];
/// assert_eq!(format_path(&path, 2), "0 2 1 \nTotal cost is 2\n");
/// ```
#[must_use]
pub fn format_path(path: &[VertexId], total: u64) -> String {
    let mut out = String::new();
    for vertex in path {
        let _ = write!(out, "{vertex} ");
    }
    let _ = writeln!(out, "\nTotal cost is {total}");
    out
}

/// Render the per-destination report for a single-source run
#[must_use]
pub fn format_shortest_paths(source: VertexId, result: &ShortestPaths) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Shortest paths from vertex {source}:");
    out.push_str("=====================================\n");

    for idx in 0..result.distances.len() {
        #[allow(clippy::cast_possible_truncation)]
        let destination = VertexId(idx as u32);
        let _ = write!(out, "To vertex {destination}: ");
        match result.distance(destination) {
            Some(total) => out.push_str(&format_path(&result.path_to(destination), total)),
            None => out.push_str("No path exists.\n"),
        }
    }
    out
}

/// Render a ladder, or the not-found message for an empty one
///
/// ```
/// use pathladder::format_ladder;
///
/// let ladder = vec!["cat".to_string(), "cot".to_string()];
/// assert_eq!(format_ladder(&ladder), "Word ladder found: cat cot");
/// assert_eq!(format_ladder(&[]), "No word ladder found.");
/// ```
#[must_use]
pub fn format_ladder(ladder: &[String]) -> String {
    if ladder.is_empty() {
        return "No word ladder found.".to_string();
    }
    format!("Word ladder found: {}", ladder.join(" "))
}
