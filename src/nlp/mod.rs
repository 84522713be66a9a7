//! Text normalization and stopword handling

pub mod stopwords;
pub mod tokenizer;
