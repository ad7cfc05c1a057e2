//! Word dictionary for ladder searches
//!
//! Words are stored lowercased and deduplicated. Iteration is lexicographic,
//! and words are also bucketed by `char` count so a search can look only at
//! the lengths one edit can reach.

use crate::error::LoadError;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Set of distinct lowercase words
///
/// # Example
///
/// ```
/// use pathladder::Dictionary;
///
/// let dict = Dictionary::parse("Cat cot\nDOG dog");
/// assert_eq!(dict.len(), 3);
/// assert!(dict.contains("dog"));
/// assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["cat", "cot", "dog"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    by_length: BTreeMap<usize, BTreeSet<String>>,
    len: usize,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word (lowercased); returns `false` if it was already present
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        let inserted = self
            .by_length
            .entry(word.chars().count())
            .or_default()
            .insert(word);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Check membership of an already-lowercase word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.by_length
            .get(&word.chars().count())
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// Number of distinct words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the dictionary holds no words
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Words with exactly `length` chars, in lexicographic order
    pub fn words_of_len(&self, length: usize) -> impl Iterator<Item = &str> + '_ {
        self.by_length
            .get(&length)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
    }

    /// All words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let mut all: Vec<&str> = self
            .by_length
            .values()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
            .collect();
        all.sort_unstable();
        all.into_iter()
    }

    /// Parse whitespace-separated words from a string
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Read whitespace-separated words from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut dict = Self::new();
        for line in reader.lines() {
            for word in line?.split_whitespace() {
                dict.insert(word);
            }
        }
        Ok(dict)
    }

    /// Load a word list file
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let dict = Self::from_reader(BufReader::new(file)).map_err(io_err)?;

        debug!(path = %path.display(), words = dict.len(), "dictionary loaded");
        Ok(dict)
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut dict = Self::new();
        for word in iter {
            dict.insert(word);
        }
        dict
    }
}
