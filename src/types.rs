//! Core types for rapid_tfidf
//!
//! This module defines the shared data model produced by the term frequency
//! stage and completed by the inverse document frequency stage, together with
//! the weighting modes and the scorer configuration.

use crate::errors::{Result, TfIdfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Term
// ============================================================================

/// One distinct token of a paragraph with its weights.
///
/// `score()` is derived from `tf` and `idf` on every read and has no storage
/// of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// The token text, with the casing it had in the source
    pub word: String,
    /// Whether the lowercased word is in the active stopword set
    pub stopword: bool,
    /// Term frequency under the selected [`TfMode`]
    pub tf: f64,
    /// Inverse document frequency across the corpus (0.0 until the IDF stage runs)
    pub idf: f64,
}

impl Term {
    /// Create a term with no IDF assigned yet
    pub fn new(word: impl Into<String>, stopword: bool, tf: f64) -> Self {
        Self {
            word: word.into(),
            stopword,
            tf,
            idf: 0.0,
        }
    }

    /// `tf * idf`
    #[inline]
    pub fn score(&self) -> f64 {
        self.tf * self.idf
    }
}

// ============================================================================
// Paragraph
// ============================================================================

/// One input string together with its distinct terms and aggregate score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// The original, unmodified input
    pub text: String,
    /// One entry per distinct token, in order of first occurrence
    pub terms: Vec<Term>,
    /// Aggregate relevance, `None` until the IDF stage has run
    pub score: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            text: text.into(),
            terms,
            score: None,
        }
    }

    /// Terms that take part in score aggregation
    pub fn content_terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(|t| !t.stopword)
    }

    /// Find a term by its exact (case-sensitive) word
    pub fn term(&self, word: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.word == word)
    }

    /// The `n` highest scoring non-stopword terms, best first
    pub fn top_terms(&self, n: usize) -> Vec<&Term> {
        let mut terms: Vec<&Term> = self.content_terms().collect();
        terms.sort_by(|a, b| b.score().total_cmp(&a.score()));
        terms.truncate(n);
        terms
    }

    /// Whether the IDF stage has assigned a score
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}

// ============================================================================
// Term Frequency Mode
// ============================================================================

/// Weighting applied to a term within its own paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TfMode {
    /// 1 when the token occurs in the paragraph
    Binary,
    /// Raw occurrence count
    #[default]
    Count,
    /// Token count of the whole paragraph, identical for every term
    Freq,
    /// `ln(1 + count)`
    Log,
    /// Reserved; has no formula and is rejected at runtime
    Arg,
}

impl TfMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TfMode::Binary => "binary",
            TfMode::Count => "count",
            TfMode::Freq => "freq",
            TfMode::Log => "log",
            TfMode::Arg => "arg",
        }
    }

    /// Whether a formula is defined for this mode
    pub fn is_supported(&self) -> bool {
        !matches!(self, TfMode::Arg)
    }
}

impl fmt::Display for TfMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TfMode {
    type Err = TfIdfError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "binary" => Ok(TfMode::Binary),
            "count" => Ok(TfMode::Count),
            "freq" | "frequency" => Ok(TfMode::Freq),
            "log" => Ok(TfMode::Log),
            "arg" => Ok(TfMode::Arg),
            other => Err(TfIdfError::invalid_config(format!(
                "unknown term frequency mode '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Aggregation Mode
// ============================================================================

/// How term scores are folded into one paragraph score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggMode {
    /// Arithmetic mean of non-stopword term scores
    #[default]
    Avg,
    /// Sum of non-stopword term scores
    Sum,
    /// `ln(1 + sum / corpus-wide non-stopword term count)`
    Arg,
}

impl AggMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggMode::Avg => "avg",
            AggMode::Sum => "sum",
            AggMode::Arg => "arg",
        }
    }
}

impl fmt::Display for AggMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggMode {
    type Err = TfIdfError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "avg" | "mean" | "average" => Ok(AggMode::Avg),
            "sum" => Ok(AggMode::Sum),
            "arg" => Ok(AggMode::Arg),
            other => Err(TfIdfError::invalid_config(format!(
                "unknown aggregation mode '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for [`crate::scorer::TfIdfScorer`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    /// Term frequency weighting
    pub tf_mode: TfMode,
    /// Paragraph score aggregation
    pub aggregation: AggMode,
    /// Explicit stopwords; `None` derives them from the corpus
    pub stopwords: Option<Vec<String>>,
}

impl TfIdfConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.tf_mode.is_supported() {
            return Err(TfIdfError::unsupported_mode(
                "term frequency",
                self.tf_mode.as_str(),
            ));
        }
        Ok(())
    }

    /// Builder method: set term frequency mode
    pub fn with_tf_mode(mut self, mode: TfMode) -> Self {
        self.tf_mode = mode;
        self
    }

    /// Builder method: set aggregation mode
    pub fn with_aggregation(mut self, mode: AggMode) -> Self {
        self.aggregation = mode;
        self
    }

    /// Builder method: use an explicit stopword list
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(stopwords.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method: derive stopwords from the corpus
    pub fn with_derived_stopwords(mut self) -> Self {
        self.stopwords = None;
        self
    }
}
