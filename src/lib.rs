//! # rapid_tfidf
//!
//! TF-IDF relevance scoring for the paragraphs of a small corpus, plus a
//! token frequency (Zipf) ranking utility.
//!
//! ## Pipeline
//!
//! 1. [`tokenize`] normalizes text (tags, numbers, URLs, emails, `$`,
//!    mentions) and splits it on a fixed delimiter set.
//! 2. [`compute_tf`] builds one [`Paragraph`] per non-empty input with a
//!    [`Term`] per distinct token, weighted by a [`TfMode`].
//! 3. [`compute_idf`] takes those paragraphs by value, assigns each term an
//!    IDF and each paragraph a score under an [`AggMode`], and returns them.
//!
//! ```
//! use rapid_tfidf::{compute_idf, compute_tf, AggMode, TfMode};
//!
//! let docs = ["a b c", "a b d"];
//! let paragraphs = compute_tf(&docs, TfMode::Count, Some(&[][..])).unwrap();
//! let scored = compute_idf(paragraphs, AggMode::Avg).unwrap();
//! assert!(scored[0].score.unwrap() < 0.0);
//! ```
//!
//! [`TfIdfScorer`] wraps both stages behind a serde-friendly [`TfIdfConfig`].

pub mod errors;
pub mod nlp;
pub mod scorer;
pub mod types;
pub mod weighting;
pub mod zipf;

// Re-export commonly used types
pub use errors::{Result, TfIdfError};
pub use types::{AggMode, Paragraph, Term, TfIdfConfig, TfMode};

// Re-export main functionality
pub use nlp::{stopwords::StopwordFilter, tokenizer::tokenize, tokenizer::Tokenizer};
pub use scorer::{rank_paragraphs, score_paragraphs, TfIdfScorer};
pub use weighting::{inverse_document_frequency::compute_idf, term_frequency::compute_tf};
pub use zipf::{rank, rank_tokens, FrequencyTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
