//! Term frequency stage
//!
//! Builds one [`Paragraph`] per non-empty document, with one [`Term`] per
//! distinct (case-sensitive) token in order of first occurrence.

use crate::errors::{Result, TfIdfError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Paragraph, Term, TfMode};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Weight of a term occurring `count` times in a document of `doc_len` tokens
pub fn term_frequency(mode: TfMode, count: usize, doc_len: usize) -> Result<f64> {
    match mode {
        TfMode::Binary => Ok(if count > 0 { 1.0 } else { 0.0 }),
        TfMode::Count => Ok(count as f64),
        TfMode::Log => Ok((1.0 + count as f64).ln()),
        // Every term of a document gets the document's token count.
        TfMode::Freq => Ok(doc_len as f64),
        TfMode::Arg => Err(TfIdfError::unsupported_mode("term frequency", mode.as_str())),
    }
}

/// Compute term frequencies for `documents`.
///
/// With `stopwords == None` the stopword set is derived from the corpus
/// (see [`StopwordFilter::derive`]). Empty documents produce no paragraph.
pub fn compute_tf<S: AsRef<str>>(
    documents: &[S],
    mode: TfMode,
    stopwords: Option<&[&str]>,
) -> Result<Vec<Paragraph>> {
    ensure_supported(mode)?;
    let filter = StopwordFilter::resolve(stopwords, documents);
    compute_tf_with_filter(documents, mode, &filter)
}

fn ensure_supported(mode: TfMode) -> Result<()> {
    if !mode.is_supported() {
        return Err(TfIdfError::unsupported_mode(
            "term frequency",
            mode.as_str(),
        ));
    }
    Ok(())
}

/// Compute term frequencies against an already resolved stopword filter.
///
/// Rejects an unsupported `mode` before looking at `documents`.
pub fn compute_tf_with_filter<S: AsRef<str>>(
    documents: &[S],
    mode: TfMode,
    filter: &StopwordFilter,
) -> Result<Vec<Paragraph>> {
    ensure_supported(mode)?;

    let tokenizer = Tokenizer::new();
    let mut paragraphs = Vec::with_capacity(documents.len());

    for document in documents {
        let text = document.as_ref();
        if text.is_empty() {
            continue;
        }

        let tokens = tokenizer.tokenize(text);
        let mut order: Vec<&str> = Vec::new();
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in &tokens {
            let count = counts.entry(token.as_str()).or_insert(0);
            if *count == 0 {
                order.push(token.as_str());
            }
            *count += 1;
        }

        let terms = order
            .into_iter()
            .map(|word| {
                let tf = term_frequency(mode, counts[word], tokens.len())?;
                Ok(Term::new(word, filter.is_stopword(word), tf))
            })
            .collect::<Result<Vec<_>>>()?;

        paragraphs.push(Paragraph::new(text, terms));
    }

    debug!(
        documents = documents.len(),
        paragraphs = paragraphs.len(),
        mode = %mode,
        "computed term frequencies"
    );
    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mode() {
        let paragraphs = compute_tf(&["a b a", "c"], TfMode::Count, Some(&[])).unwrap();

        assert_eq!(paragraphs.len(), 2);
        let first = &paragraphs[0];
        assert_eq!(first.text, "a b a");
        assert_eq!(first.terms.len(), 2);
        assert_eq!(first.terms[0].word, "a");
        assert_eq!(first.terms[0].tf, 2.0);
        assert_eq!(first.terms[1].word, "b");
        assert_eq!(first.terms[1].tf, 1.0);
        assert!(first.score.is_none());
    }

    #[test]
    fn test_binary_mode() {
        let paragraphs = compute_tf(&["x x x y"], TfMode::Binary, Some(&[])).unwrap();
        assert!(paragraphs[0].terms.iter().all(|t| t.tf == 1.0));
    }

    #[test]
    fn test_log_mode() {
        let paragraphs = compute_tf(&["x x x y"], TfMode::Log, Some(&[])).unwrap();
        assert_eq!(paragraphs[0].term("x").unwrap().tf, 4.0f64.ln());
        assert_eq!(paragraphs[0].term("y").unwrap().tf, 2.0f64.ln());
    }

    #[test]
    fn test_freq_mode_uses_document_length() {
        let paragraphs = compute_tf(&["x x x y", "z"], TfMode::Freq, Some(&[])).unwrap();
        assert!(paragraphs[0].terms.iter().all(|t| t.tf == 4.0));
        assert_eq!(paragraphs[1].terms[0].tf, 1.0);
    }

    #[test]
    fn test_freq_mode_counts_empty_tokens() {
        // "a..b" splits into ["a", "", "b"]
        let paragraphs = compute_tf(&["a..b"], TfMode::Freq, Some(&[])).unwrap();
        assert_eq!(paragraphs[0].terms.len(), 3);
        assert!(paragraphs[0].terms.iter().all(|t| t.tf == 3.0));
    }

    #[test]
    fn test_arg_mode_is_unsupported() {
        let err = compute_tf(&["a b"], TfMode::Arg, None).unwrap_err();
        assert!(err.is_unsupported_mode());

        let err = compute_tf::<&str>(&[], TfMode::Arg, None).unwrap_err();
        assert!(err.is_unsupported_mode());

        assert!(term_frequency(TfMode::Arg, 1, 1).is_err());
    }

    #[test]
    fn test_arg_mode_rejected_with_resolved_filter() {
        let filter = StopwordFilter::new();

        let err = compute_tf_with_filter::<&str>(&[], TfMode::Arg, &filter).unwrap_err();
        assert!(err.is_unsupported_mode());

        let err = compute_tf_with_filter(&["", ""], TfMode::Arg, &filter).unwrap_err();
        assert!(err.is_unsupported_mode());

        assert!(compute_tf_with_filter(&["", ""], TfMode::Count, &filter)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_documents_dropped() {
        let paragraphs = compute_tf(&["", "hello world", ""], TfMode::Count, None).unwrap();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "hello world");
    }

    #[test]
    fn test_terms_are_case_sensitive() {
        let paragraphs = compute_tf(&["Cat cat CAT cat"], TfMode::Count, Some(&[])).unwrap();
        let terms = &paragraphs[0].terms;
        assert_eq!(terms.len(), 3);
        assert_eq!(paragraphs[0].term("cat").unwrap().tf, 2.0);
        assert_eq!(paragraphs[0].term("Cat").unwrap().tf, 1.0);
    }

    #[test]
    fn test_stopword_flags() {
        let paragraphs = compute_tf(&["The quick fox"], TfMode::Count, Some(&["the"])).unwrap();
        assert!(paragraphs[0].term("The").unwrap().stopword);
        assert!(!paragraphs[0].term("quick").unwrap().stopword);

        let derived = compute_tf(&["The quick fox"], TfMode::Count, None).unwrap();
        assert!(derived[0].term("fox").unwrap().stopword);
        assert!(!derived[0].term("quick").unwrap().stopword);
    }

    #[test]
    fn test_placeholders_become_terms() {
        let paragraphs = compute_tf(&["pay $5 or $10"], TfMode::Count, Some(&[])).unwrap();
        assert_eq!(paragraphs[0].term("dollarnumber").unwrap().tf, 2.0);
    }
}
