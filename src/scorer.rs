//! Config-driven TF-IDF scorer
//!
//! Runs the term frequency stage and hands its paragraphs to the inverse
//! document frequency stage, using one [`TfIdfConfig`].

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Paragraph, TfIdfConfig};
use crate::weighting::inverse_document_frequency::compute_idf;
use crate::weighting::term_frequency::compute_tf_with_filter;
use tracing::debug;

/// TF-IDF paragraph scorer
#[derive(Debug, Default)]
pub struct TfIdfScorer {
    config: TfIdfConfig,
}

impl TfIdfScorer {
    /// Create a new scorer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: TfIdfConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }

    /// Stopwords this scorer would apply to `documents`
    pub fn stopwords<S: AsRef<str>>(&self, documents: &[S]) -> StopwordFilter {
        StopwordFilter::resolve(self.config.stopwords.as_deref(), documents)
    }

    /// Score every non-empty document, in input order
    pub fn score<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Paragraph>> {
        self.config.validate()?;

        let filter = self.stopwords(documents);
        debug!(
            documents = documents.len(),
            tf_mode = %self.config.tf_mode,
            aggregation = %self.config.aggregation,
            stopwords = filter.len(),
            "scoring corpus"
        );

        let paragraphs = compute_tf_with_filter(documents, self.config.tf_mode, &filter)?;
        compute_idf(paragraphs, self.config.aggregation)
    }

    /// Score and return paragraphs best first
    pub fn score_ranked<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Paragraph>> {
        self.score(documents).map(rank_paragraphs)
    }
}

/// Sort scored paragraphs by descending score; unscored paragraphs go last
pub fn rank_paragraphs(mut paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
    paragraphs.sort_by(|a, b| {
        let a = a.score.unwrap_or(f64::NEG_INFINITY);
        let b = b.score.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    paragraphs
}

/// Convenience function to score `documents` with `config`
pub fn score_paragraphs<S: AsRef<str>>(
    documents: &[S],
    config: &TfIdfConfig,
) -> Result<Vec<Paragraph>> {
    TfIdfScorer::with_config(config.clone()).score(documents)
}
