//! Input validation for the analysis pipeline.
//!
//! Pure checks applied before any scoring: empty input, length limit, and a
//! small denylist of markup patterns. Checks are ordered and short-circuit
//! on the first failure.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Default maximum text length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 1000;

// Compiled once at first use. The literals match case-insensitively
// anywhere in the text.
static DANGEROUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)<script>").expect("Invalid regex: script tag pattern"),
        Regex::new(r"(?i)javascript:").expect("Invalid regex: javascript scheme pattern"),
        Regex::new(r"(?i)onload=").expect("Invalid regex: onload handler pattern"),
    ]
});

/// Outcome of a validation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    /// User-facing rejection message; empty when the text is valid.
    pub message: String,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn reject(message: String) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

/// Validate user input before analysis.
pub fn validate_text(text: &str, max_length: usize) -> Validation {
    if text.trim().is_empty() {
        return Validation::reject("Veuillez entrer un texte à analyser.".to_string());
    }

    // The limit applies to the raw text, not the trimmed one.
    if text.chars().count() > max_length {
        return Validation::reject(format!(
            "Le texte ne doit pas dépasser {} caractères.",
            max_length
        ));
    }

    if DANGEROUS_PATTERNS.iter().any(|pattern| pattern.is_match(text)) {
        return Validation::reject(
            "Le texte contient des éléments potentiellement dangereux.".to_string(),
        );
    }

    Validation::ok()
}
