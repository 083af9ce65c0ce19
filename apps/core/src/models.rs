use serde::{Deserialize, Serialize};

/// Categorical polarity of an analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Error,
}

/// Provenance of a result: the Watson service or the local demo scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    Remote,
    Heuristic,
}

/// The canonical analysis result, produced by either scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Overall polarity of the document.
    pub sentiment: Sentiment,
    /// Signed strength, always within [-1.0, 1.0].
    pub score: f64,
    /// Human-readable label with an emoji marker.
    pub label: String,
    /// Certainty derived from the score magnitude, within [0.0, 1.0].
    /// Error and empty-text results carry 0.0.
    #[serde(default)]
    pub confidence: f64,
    /// Failure detail; present on error results and empty-text results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set by the pipeline after scoring, never by a scorer itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ScoringMode>,
    /// Full remote response, retained for diagnostics only. No downstream
    /// logic may depend on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<serde_json::Value>,
}

/// A `SentimentResult` enriched with presentation fields.
///
/// Serializes as a single flat JSON object; the underlying result fields
/// are never modified by formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// The unmodified analysis result.
    #[serde(flatten)]
    pub result: SentimentResult,
    /// CSS class the web layer uses to color the result card.
    pub css_class: String,
    /// Score magnitude as a percentage string, one decimal place.
    pub score_percent: String,
    /// Bootstrap-style gauge color name.
    pub gauge_color: String,
    /// French translation of the sentiment.
    pub sentiment_fr: String,
    /// One-sentence summary for display.
    pub summary: String,
    /// Constant demo-mode disclaimer; absent on remote results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
