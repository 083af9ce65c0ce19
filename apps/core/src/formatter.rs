//! Display formatting for analysis results.
//!
//! Pure enrichment with the fields the web layer displays. The underlying
//! result is never modified and no external state is consulted.

use crate::models::{FormattedResult, Sentiment, SentimentResult};

/// CSS class the web layer uses to color the result card.
fn css_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "sentiment-positive",
        Sentiment::Negative => "sentiment-negative",
        Sentiment::Neutral => "sentiment-neutral",
        Sentiment::Error => "sentiment-error",
    }
}

/// French translation of the sentiment.
fn french_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Positif",
        Sentiment::Negative => "Négatif",
        Sentiment::Neutral => "Neutre",
        Sentiment::Error => "Erreur",
    }
}

/// Gauge color ladder, checked top-down; first match wins.
fn gauge_color(score: f64) -> &'static str {
    if score > 0.5 {
        "success"
    } else if score > 0.0 {
        "info"
    } else if score < -0.5 {
        "danger"
    } else if score < 0.0 {
        "warning"
    } else {
        "secondary"
    }
}

/// Enrich a result with presentation fields.
pub fn format_result(result: &SentimentResult) -> FormattedResult {
    let sentiment_fr = french_label(result.sentiment).to_string();

    let summary = if result.sentiment == Sentiment::Error {
        "Une erreur s'est produite lors de l'analyse.".to_string()
    } else {
        format!(
            "Sentiment {} (confiance: {:.0}%)",
            sentiment_fr.to_lowercase(),
            result.confidence * 100.0
        )
    };

    FormattedResult {
        result: result.clone(),
        css_class: css_class(result.sentiment).to_string(),
        score_percent: format!("{:.1}%", result.score.abs() * 100.0),
        gauge_color: gauge_color(result.score).to_string(),
        sentiment_fr,
        summary,
        warning: None,
    }
}
