//! Word ladders: breadth-first search over one-edit adjacency
//!
//! Frontier-based BFS where the graph is implicit: dictionary words are the
//! nodes and `adjacent` decides the edges.

use super::edit::adjacent;
use crate::dictionary::Dictionary;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Find a shortest word ladder from `start` to `end`
///
/// Both endpoints are lowercased first. `start` does not have to be in the
/// dictionary; `end` does.
///
/// # Returns
///
/// - `[start]` when `start` and `end` are the same word
/// - an empty ladder when `end` is not in the dictionary or cannot be reached
/// - otherwise a minimal-length ladder; when several exist, the neighbours of
///   each word are explored in lexicographic order and the first ladder to
///   reach `end` wins
///
/// # Complexity
///
/// Each dictionary word is enqueued at most once. Neighbour lookup scans only
/// the length buckets one edit can reach.
///
/// # Example
///
/// ```
/// use pathladder::{shortest_ladder, Dictionary};
///
/// let dict = Dictionary::parse("cat cot cog dog dot");
///
/// assert_eq!(shortest_ladder("cat", "dog", &dict), vec!["cat", "cot", "cog", "dog"]);
/// assert!(shortest_ladder("cat", "xyz", &dict).is_empty());
/// ```
#[must_use]
pub fn shortest_ladder(start: &str, end: &str, dictionary: &Dictionary) -> Vec<String> {
    let start = start.to_lowercase();
    let end = end.to_lowercase();

    if start == end {
        return vec![start];
    }

    if !dictionary.contains(&end) {
        debug!(end = %end, "end word not in dictionary");
        return Vec::new();
    }

    // Visited words mapped to the word they were discovered from
    let mut previous: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = VecDeque::new();

    previous.insert(start.as_str(), None);
    queue.push_back(start.as_str());

    while let Some(last) = queue.pop_front() {
        let mut next: Vec<&str> = neighbor_buckets(last)
            .flat_map(|len| dictionary.words_of_len(len))
            .filter(|word| !previous.contains_key(word) && adjacent(last, word))
            .collect();
        next.sort_unstable();

        for word in next {
            previous.insert(word, Some(last));
            if word == end {
                let ladder = unwind(&previous, word);
                debug!(
                    start = %start,
                    end = %end,
                    length = ladder.len(),
                    explored = previous.len(),
                    "ladder found"
                );
                return ladder;
            }
            queue.push_back(word);
        }
    }

    debug!(start = %start, end = %end, explored = previous.len(), "no ladder");
    Vec::new()
}

/// Word lengths reachable from `word` with one edit
fn neighbor_buckets(word: &str) -> impl Iterator<Item = usize> {
    let len = word.chars().count();
    len.checked_sub(1).into_iter().chain([len, len + 1])
}

fn unwind(previous: &HashMap<&str, Option<&str>>, end: &str) -> Vec<String> {
    let mut ladder = vec![end.to_string()];
    let mut current = end;
    while let Some(&Some(pred)) = previous.get(current) {
        ladder.push(pred.to_string());
        current = pred;
    }
    ladder.reverse();
    ladder
}
