//! Demo-mode sentiment estimation.
//!
//! Keyword-presence scoring used when no Watson credentials are configured.
//! Deliberately crude: keywords match by substring containment, so a hit
//! inside an unrelated word still counts. This is a fallback, not a
//! classifier.

use crate::models::{Sentiment, SentimentResult};

/// Positive keywords (French).
const POSITIVE_WORDS: &[&str] = &[
    "bon",
    "bonne",
    "excellent",
    "super",
    "génial",
    "heureux",
    "content",
    "parfait",
    "magnifique",
    "fantastique",
];

/// Negative keywords (French).
const NEGATIVE_WORDS: &[&str] = &[
    "mauvais",
    "mauvaise",
    "terrible",
    "horrible",
    "nul",
    "triste",
    "déçu",
    "déçue",
    "problème",
    "erreur",
];

/// Keyword-based fallback scorer.
pub struct HeuristicScorer;

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    /// Estimate the sentiment of `text`.
    ///
    /// Each keyword contributes at most one hit; the balance of hits is
    /// divided by the whitespace word count and clamped to [-1.0, 1.0].
    pub fn estimate(&self, text: &str) -> SentimentResult {
        let text_lower = text.to_lowercase();

        let positive_count = POSITIVE_WORDS
            .iter()
            .filter(|word| text_lower.contains(**word))
            .count();
        let negative_count = NEGATIVE_WORDS
            .iter()
            .filter(|word| text_lower.contains(**word))
            .count();

        // Hits are counted on the lower-cased copy, words on the raw text.
        let total_words = text.split_whitespace().count();
        let raw_score = if total_words > 0 {
            (positive_count as f64 - negative_count as f64) / total_words as f64
        } else {
            0.0
        };
        let score = raw_score.clamp(-1.0, 1.0);

        let (sentiment, label) = if score > 0.2 {
            (Sentiment::Positive, "😊 Positif (démo)")
        } else if score < -0.2 {
            (Sentiment::Negative, "😞 Négatif (démo)")
        } else {
            (Sentiment::Neutral, "😐 Neutre (démo)")
        };

        SentimentResult {
            sentiment,
            score,
            label: label.to_string(),
            confidence: (score.abs() + 0.3).min(0.95),
            error: None,
            mode: None,
            raw_data: None,
        }
    }
}
