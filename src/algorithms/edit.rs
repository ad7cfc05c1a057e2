//! Edit-distance predicates over words
//!
//! - `adjacent`: exactly one substitution, insertion or deletion apart
//! - `edit_distance_within`: Levenshtein distance at most `d`
//!
//! The two differ on identical words: `adjacent(w, w)` is false, while
//! `edit_distance_within(w, w, d)` holds for every `d`.
//!
//! Lengths are counted in `char`s, not bytes.

/// Check if two words are exactly one edit apart
///
/// Equal lengths need exactly one mismatched position; lengths differing by
/// one need the longer word to reduce to the shorter by deleting a single
/// character. Anything else is not adjacent.
///
/// # Complexity
///
/// O(n): a single forward scan allowing one mismatch or one skip
///
/// # Example
///
/// ```
/// use pathladder::adjacent;
///
/// assert!(adjacent("cat", "cot"));   // substitution
/// assert!(adjacent("cat", "cart"));  // insertion
/// assert!(adjacent("cart", "cat"));  // deletion
/// assert!(!adjacent("cat", "cat"));  // identical words are not one edit apart
/// assert!(!adjacent("cat", "dog"));
/// ```
#[must_use]
pub fn adjacent(word1: &str, word2: &str) -> bool {
    let len1 = word1.chars().count();
    let len2 = word2.chars().count();

    match len1.abs_diff(len2) {
        0 => one_substitution(word1, word2),
        1 if len1 < len2 => one_insertion(word1, word2),
        1 => one_insertion(word2, word1),
        _ => false,
    }
}

/// Equal-length words differing in exactly one position
fn one_substitution(a: &str, b: &str) -> bool {
    let mut mismatches = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    mismatches == 1
}

/// `longer` is `shorter` with exactly one character inserted
///
/// Caller guarantees `longer` has exactly one more char than `shorter`.
fn one_insertion(shorter: &str, longer: &str) -> bool {
    let mut short = shorter.chars().peekable();
    let mut skipped = false;

    for ch in longer.chars() {
        if short.peek() == Some(&ch) {
            short.next();
        } else if skipped {
            return false;
        } else {
            skipped = true;
        }
    }

    short.peek().is_none()
}

/// Check if the Levenshtein distance between `a` and `b` is at most `d`
///
/// Only the diagonal band of width `2d + 1` of the edit matrix is computed,
/// and the scan stops as soon as a whole row exceeds `d`. Cells outside the
/// band are never touched after setup.
///
/// # Complexity
///
/// O(n · d) time after O(m) setup, O(m) space
///
/// # Example
///
/// ```
/// use pathladder::edit_distance_within;
///
/// assert!(edit_distance_within("cat", "cat", 0));
/// assert!(edit_distance_within("kitten", "sitting", 3));
/// assert!(!edit_distance_within("kitten", "sitting", 2));
/// ```
#[must_use]
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    if a == b {
        return true;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > d {
        return false;
    }
    // The distance never exceeds the longer length
    let d = d.min(a.len().max(b.len()));

    // Anything above `d` is clamped to `over` so the band stays cheap
    let over = d + 1;
    let mut prev: Vec<usize> = (0..=b.len()).map(|j| j.min(over)).collect();
    let mut curr = vec![over; b.len() + 1];

    for i in 1..=a.len() {
        let lo = i.saturating_sub(d).max(1);
        let hi = (i + d).min(b.len());

        // Cells left of the band still hold values from two rows back
        curr[lo - 1..=hi].fill(over);
        curr[0] = i.min(over);
        let mut row_min = curr[0];

        for j in lo..=hi {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let value = (prev[j - 1] + cost)
                .min(prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(over);
            curr[j] = value;
            row_min = row_min.min(value);
        }

        if row_min > d {
            return false;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()] <= d
}
