//! Error types for rapid_tfidf
//!
//! Every failure propagates synchronously to the caller as a distinct
//! variant. Nothing is retried and no partial results are returned.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TfIdfError>;

/// Main error type for rapid_tfidf
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TfIdfError {
    /// A weighting or aggregation mode was selected that has no formula
    #[error("Unsupported {stage} mode: {mode}")]
    UnsupportedMode { stage: &'static str, mode: String },

    /// Mean aggregation over a paragraph with no non-stopword terms
    #[error("No terms to average in paragraph {paragraph}")]
    EmptyAggregationSet { paragraph: usize },

    /// A denominator evaluated to zero
    #[error("Division by zero: {message}")]
    DivisionByZero { message: String },

    /// Configuration could not be parsed or validated
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl TfIdfError {
    /// Create an unsupported mode error
    pub fn unsupported_mode(stage: &'static str, mode: impl Into<String>) -> Self {
        Self::UnsupportedMode {
            stage,
            mode: mode.into(),
        }
    }

    /// Create an empty aggregation set error for the paragraph at `paragraph`
    pub fn empty_aggregation_set(paragraph: usize) -> Self {
        Self::EmptyAggregationSet { paragraph }
    }

    /// Create a division by zero error
    pub fn division_by_zero(message: impl Into<String>) -> Self {
        Self::DivisionByZero {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn is_unsupported_mode(&self) -> bool {
        matches!(self, Self::UnsupportedMode { .. })
    }

    pub fn is_empty_aggregation_set(&self) -> bool {
        matches!(self, Self::EmptyAggregationSet { .. })
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TfIdfError::unsupported_mode("term frequency", "Arg");
        assert!(err.to_string().contains("Unsupported term frequency mode"));
        assert!(err.to_string().contains("Arg"));

        let err = TfIdfError::empty_aggregation_set(3);
        assert!(err.to_string().contains("No terms to average"));
        assert!(err.to_string().contains('3'));

        let err = TfIdfError::division_by_zero("corpus has no scorable terms");
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(TfIdfError::unsupported_mode("aggregation", "x").is_unsupported_mode());
        assert!(TfIdfError::empty_aggregation_set(0).is_empty_aggregation_set());
        assert!(TfIdfError::division_by_zero("x").is_division_by_zero());

        let err = TfIdfError::invalid_config("bad");
        assert!(!err.is_unsupported_mode());
        assert!(!err.is_empty_aggregation_set());
        assert!(!err.is_division_by_zero());
    }
}
