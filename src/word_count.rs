//! src/word_count.rs
use std::collections::HashMap;
use std::collections::hash_map::{IntoIter, Iter};

/// Occurrences of normalized words. Keys are only ever inserted or
/// incremented.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCount(HashMap<String, usize>);

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, word: &str) {
        self.add(word, 1);
    }

    pub fn add(&mut self, word: &str, count: usize) {
        match self.0.get_mut(word) {
            Some(current) => *current += count,
            None => {
                self.0.insert(word.to_string(), count);
            }
        }
    }

    /// Pointwise addition of `other` into `self`.
    pub fn merge(&mut self, other: WordCount) -> &mut Self {
        self.extend(other);
        self
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> Iter<'_, String, usize> {
        self.0.iter()
    }
}

impl Extend<(String, usize)> for WordCount {
    fn extend<T: IntoIterator<Item = (String, usize)>>(&mut self, iter: T) {
        for (word, count) in iter {
            *self.0.entry(word).or_insert(0) += count;
        }
    }
}

impl FromIterator<(String, usize)> for WordCount {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        let mut words = WordCount::new();
        words.extend(iter);
        words
    }
}

impl IntoIterator for WordCount {
    type Item = (String, usize);
    type IntoIter = IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordCount {
    type Item = (&'a String, &'a usize);
    type IntoIter = Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
