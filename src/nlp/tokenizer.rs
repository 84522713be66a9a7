//! Placeholder-substituting tokenizer
//!
//! Text is normalized by a fixed sequence of regex substitutions and then
//! split on a fixed set of ASCII delimiters. Each substitution sees the
//! output of the previous one, so the order of [`Tokenizer::normalize`]
//! is part of its contract.
//!
//! Splitting is a plain character split: adjacent delimiters yield empty
//! tokens, and those are kept.

use regex::Regex;
use std::sync::OnceLock;

/// Characters that separate tokens after normalization
pub const DELIMITERS: &[char] = &[
    ' ', '@', '$', '/', '#', '.', '-', ':', '&', '*', '+', '=', '[', ']', '?', '!', '(', ')', '{',
    '}', ',', '\'', '"', '>', '_', '<', ';', '%', '\\',
];

/// Placeholder for a run of digits
pub const NUMBER: &str = "number";
/// Placeholder for an http(s) URL
pub const HTTP_ADDR: &str = "httpaddr";
/// Placeholder for an email-like token
pub const EMAIL_ADDR: &str = "emailaddr";
/// Placeholder for a run of `$`
pub const DOLLAR: &str = "dollar";
/// Placeholder for an `@mention`
pub const USERNAME: &str = "username";

struct Patterns {
    /// (pattern, replacement) in application order
    steps: Vec<(Regex, &'static str)>,
}

fn compiled_patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        steps: vec![
            (Regex::new(r"<[^<>]+>").unwrap(), ""),
            (Regex::new(r"[0-9]+").unwrap(), NUMBER),
            (Regex::new(r"(http|https)://[^\s]*").unwrap(), HTTP_ADDR),
            (Regex::new(r"[^\s]+@[^\s]+").unwrap(), EMAIL_ADDR),
            (Regex::new(r"[$]+").unwrap(), DOLLAR),
            (Regex::new(r"@[^\s]+").unwrap(), USERNAME),
        ],
    })
}

/// Regex-normalizing delimiter tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Apply the placeholder substitutions without splitting.
    ///
    /// Order: strip tags, digits, URLs, emails, `$` runs, mentions.
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for (pattern, replacement) in &compiled_patterns().steps {
            let replaced = pattern.replace_all(&normalized, *replacement).into_owned();
            normalized = replaced;
        }
        normalized
    }

    /// Normalize and split `text` into tokens, keeping empty tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(DELIMITERS)
            .map(str::to_string)
            .collect()
    }

    /// Check if a character is a token delimiter
    pub fn is_delimiter(c: char) -> bool {
        DELIMITERS.contains(&c)
    }
}

/// Tokenize `text` with the default [`Tokenizer`]
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}
