//! Inverse document frequency stage
//!
//! Takes ownership of the paragraphs built by the term frequency stage,
//! assigns `idf` to every term and a `score` to every paragraph, and hands
//! the same collection back.
//!
//! Document frequency matches words case-insensitively, while terms within
//! a paragraph were deduplicated case-sensitively. `Cat` and `cat` in one
//! paragraph are two terms that count that paragraph once.

use crate::errors::{Result, TfIdfError};
use crate::types::{AggMode, Paragraph};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};

/// `ln(total / (1 + containing))`.
///
/// The `+ 1` makes the denominator at least 2 for any word that occurs, so
/// a word present in most paragraphs gets a negative weight.
#[inline]
pub fn inverse_document_frequency(total: usize, containing: usize) -> f64 {
    (total as f64 / (1 + containing) as f64).ln()
}

/// Number of paragraphs containing each lowercased word
fn document_frequencies(paragraphs: &[Paragraph]) -> FxHashMap<String, usize> {
    let mut frequencies: FxHashMap<String, usize> = FxHashMap::default();
    for paragraph in paragraphs {
        let distinct: FxHashSet<String> = paragraph
            .terms
            .iter()
            .map(|t| t.word.to_lowercase())
            .collect();
        for word in distinct {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Fold the non-stopword term scores of `paragraph` into one value.
///
/// `corpus_terms` is the number of non-stopword terms across every
/// paragraph, used only by [`AggMode::Arg`]. `index` identifies the
/// paragraph in errors.
pub fn aggregate(
    mode: AggMode,
    paragraph: &Paragraph,
    corpus_terms: usize,
    index: usize,
) -> Result<f64> {
    let (count, sum) = paragraph
        .content_terms()
        .fold((0usize, 0.0f64), |(n, s), t| (n + 1, s + t.score()));

    match mode {
        AggMode::Avg => {
            if count == 0 {
                warn!(paragraph = index, "no non-stopword terms to average");
                return Err(TfIdfError::empty_aggregation_set(index));
            }
            Ok(sum / count as f64)
        }
        AggMode::Sum => Ok(sum),
        AggMode::Arg => {
            if corpus_terms == 0 {
                return Err(TfIdfError::division_by_zero(
                    "corpus has no non-stopword terms",
                ));
            }
            Ok((1.0 + sum / corpus_terms as f64).ln())
        }
    }
}

/// Assign IDF weights and paragraph scores.
///
/// Fails without returning any paragraphs if a single paragraph cannot be
/// aggregated under `mode`.
pub fn compute_idf(mut paragraphs: Vec<Paragraph>, mode: AggMode) -> Result<Vec<Paragraph>> {
    let total = paragraphs.len();
    let frequencies = document_frequencies(&paragraphs);
    let corpus_terms: usize = paragraphs.iter().map(|p| p.content_terms().count()).sum();

    debug!(
        paragraphs = total,
        vocabulary = frequencies.len(),
        corpus_terms,
        mode = %mode,
        "computing inverse document frequencies"
    );

    for (index, paragraph) in paragraphs.iter_mut().enumerate() {
        for term in &mut paragraph.terms {
            let containing = frequencies
                .get(&term.word.to_lowercase())
                .copied()
                .unwrap_or(0);
            term.idf = inverse_document_frequency(total, containing);
        }

        let score = aggregate(mode, paragraph, corpus_terms, index)?;
        trace!(paragraph = index, score, "scored paragraph");
        paragraph.score = Some(score);
    }

    Ok(paragraphs)
}
