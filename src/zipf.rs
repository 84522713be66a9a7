//! Token frequency ranking
//!
//! Counts identical tokens and orders them by descending count, the shape of
//! a Zipf rank-frequency table. Independent of the TF-IDF stages.

use crate::nlp::tokenizer::Tokenizer;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Tokens with their occurrence counts, highest count first.
///
/// Equal counts keep first-occurrence order, but callers should not depend
/// on the order among ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match index.get(token) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(token.to_string(), entries.len());
                    entries.push((token.to_string(), 1));
                }
            }
        }

        // stable: ties stay in first-occurrence order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Iterate `(token, count)` pairs in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Count for `token`, if present
    pub fn get(&self, token: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, c)| *c)
    }

    /// The `n` most frequent entries
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn into_vec(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a (String, usize);
    type IntoIter = std::slice::Iter<'a, (String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Tokenize `text` and rank its tokens
pub fn rank(text: &str) -> FrequencyTable {
    FrequencyTable::from_tokens(Tokenizer::new().tokenize(text))
}

/// Rank a sequence of strings.
///
/// If any element contains a space, the elements are joined with single
/// spaces and tokenized as one text. Otherwise they are counted as given.
/// Only the ASCII space triggers this; tabs and newlines do not.
pub fn rank_tokens<S: AsRef<str>>(items: &[S]) -> FrequencyTable {
    if items.iter().any(|s| s.as_ref().contains(' ')) {
        let joined = items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        return rank(&joined);
    }
    FrequencyTable::from_tokens(items)
}
