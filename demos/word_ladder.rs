//! Word ladders over an in-memory dictionary
//!
//! Run with: cargo run --example word_ladder

use pathladder::{format_ladder, shortest_ladder, Dictionary};

fn main() {
    println!("🦀 pathladder: word ladder example\n");

    let dict = Dictionary::parse(
        "cold cord card ward warm word worm
         cat cot cog dog dot
         hit hot lot log",
    );
    println!("📖 Dictionary: {} words\n", dict.len());

    for (start, end) in [("cold", "warm"), ("cat", "dog"), ("hit", "cog"), ("cat", "zebra")] {
        let ladder = shortest_ladder(start, end, &dict);
        println!("  {start} → {end}: {}", format_ladder(&ladder));
    }

    println!("\n✨ Example complete!");
}
