//! Stopword sets
//!
//! A caller may supply an explicit list, which is used verbatim. Without one,
//! a set is derived from the corpus itself: every distinct lowercased token of
//! at most [`DERIVED_MAX_LEN`] characters. This is a length heuristic, not a
//! linguistic list, and it will flag short content words ("cat", "dog") too.

use super::tokenizer::Tokenizer;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Longest token (in characters) that the derived set includes
pub const DERIVED_MAX_LEN: usize = 3;

/// Membership test over lowercased words
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// An empty filter that flags nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit list as given
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Derive a stopword set from the corpus
    pub fn derive<S: AsRef<str>>(documents: &[S]) -> Self {
        let joined = documents
            .iter()
            .map(|d| d.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");

        let stopwords: FxHashSet<String> = Tokenizer::new()
            .tokenize(&joined)
            .into_iter()
            .map(|token| token.to_lowercase())
            .filter(|token| token.chars().count() <= DERIVED_MAX_LEN)
            .collect();

        debug!(
            documents = documents.len(),
            stopwords = stopwords.len(),
            "derived stopwords from corpus"
        );
        Self { stopwords }
    }

    /// The explicit list when given, otherwise a set derived from `documents`
    pub fn resolve<W, S>(explicit: Option<&[W]>, documents: &[S]) -> Self
    where
        W: AsRef<str>,
        S: AsRef<str>,
    {
        match explicit {
            Some(words) => Self::from_words(words.iter().map(|w| w.as_ref())),
            None => Self::derive(documents),
        }
    }

    /// Check whether the lowercased `word` is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Check for an exact entry, without lowercasing
    pub fn contains(&self, entry: &str) -> bool {
        self.stopwords.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
