//! Shortest paths over a small road network
//!
//! Run with: cargo run --example shortest_paths

use pathladder::{format_shortest_paths, shortest_paths, Graph, VertexId};

fn main() {
    println!("🦀 pathladder: Dijkstra example\n");

    // 0 = depot, 1..=4 = stops, 5 = unreachable warehouse
    let graph = Graph::parse_text(
        "6
0 1 7
0 2 9
0 4 14
1 2 10
1 3 15
2 3 11
2 4 2
4 3 9
",
    );

    println!(
        "📊 Graph: {} vertices, {} edges\n",
        graph.num_vertices(),
        graph.num_edges()
    );

    let source = VertexId(0);
    let result = shortest_paths(&graph, source);
    print!("{}", format_shortest_paths(source, &result));

    let to_3 = result.path_to(VertexId(3));
    println!("\n🔍 Depot to stop 3 goes through {} vertices", to_3.len());
    assert_eq!(result.distance(VertexId(3)), Some(20));
    assert_eq!(result.distance(VertexId(5)), None);

    println!("\n✨ Example complete!");
}
