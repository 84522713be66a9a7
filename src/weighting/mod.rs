//! TF-IDF weighting stages
//!
//! [`term_frequency::compute_tf`] builds the paragraphs and
//! [`inverse_document_frequency::compute_idf`] consumes and completes them.

pub mod inverse_document_frequency;
pub mod term_frequency;
