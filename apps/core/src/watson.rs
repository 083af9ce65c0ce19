//! Watson NLU sentiment client.
//!
//! Issues a single bounded request per analysis and maps the raw response,
//! or any failure, into the internal result shape. Every failure path
//! yields a well-formed `SentimentResult`; nothing escapes as an error.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::config::WatsonCredentials;
use crate::models::{Sentiment, SentimentResult};

// --- Constants ---
const ANALYZE_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Watson NLU sentiment endpoint.
pub struct WatsonClient {
    client: Client,
    url: String,
    api_key: String,
    timeout: Duration,
}

impl WatsonClient {
    pub fn new(credentials: &WatsonCredentials) -> Self {
        Self {
            client: Client::new(),
            url: credentials.url.clone(),
            api_key: credentials.api_key.clone(),
            timeout: ANALYZE_TIMEOUT,
        }
    }

    fn build_request(&self, payload: &serde_json::Value) -> reqwest::RequestBuilder {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key);
        headers.insert(
            AUTHORIZATION,
            auth_value.parse().expect("Failed to parse auth header"),
        );

        self.client.post(&self.url).headers(headers).json(payload)
    }

    /// Analyze the sentiment of `text`.
    ///
    /// Empty input short-circuits to a neutral result without any network
    /// call. Timeouts, non-200 responses, and transport failures are all
    /// reported through the `ERROR` sentiment.
    pub async fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult {
                sentiment: Sentiment::Neutral,
                score: 0.0,
                label: "🤔 Texte vide".to_string(),
                confidence: 0.0,
                error: Some("Aucun texte fourni".to_string()),
                mode: None,
                raw_data: None,
            };
        }

        let payload = serde_json::json!({
            "text": text,
            "features": {
                "sentiment": {},
                "emotion": {
                    "targets": []
                }
            }
        });

        info!("Requête Watson ({} caractères)", text.chars().count());

        let request_future = self.build_request(&payload).send();

        let response = match timeout(self.timeout, request_future).await {
            Err(_) => {
                warn!("Watson API timed out after {:?}", self.timeout);
                return Self::timeout_result();
            }
            Ok(Err(e)) if e.is_timeout() => {
                warn!("Watson API timed out: {}", e);
                return Self::timeout_result();
            }
            Ok(Err(e)) => {
                error!("Watson request failed: {}", e);
                return Self::failure_result(&e.to_string());
            }
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Self::api_error_result(status, &body);
        }

        match response.json::<serde_json::Value>().await {
            Ok(data) => Self::parse_response(data),
            Err(e) => {
                error!("Watson response could not be decoded: {}", e);
                Self::failure_result(&e.to_string())
            }
        }
    }

    /// Map a successful NLU response into the canonical result shape.
    ///
    /// Missing fields fall back to a zero-score neutral document; labels
    /// outside the known set collapse to neutral.
    fn parse_response(data: serde_json::Value) -> SentimentResult {
        let document = &data["sentiment"]["document"];
        let score = document["score"].as_f64().unwrap_or(0.0);
        let label = document["label"].as_str().unwrap_or("neutral").to_uppercase();

        let sentiment = match label.as_str() {
            "POSITIVE" => Sentiment::Positive,
            "NEGATIVE" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        };

        let display_label = match sentiment {
            Sentiment::Positive => positive_label(score),
            Sentiment::Negative => negative_label(score),
            _ => "😐 Neutre",
        };

        SentimentResult {
            sentiment,
            score: round3(score),
            label: display_label.to_string(),
            confidence: calculate_confidence(score),
            error: None,
            mode: None,
            raw_data: Some(data),
        }
    }

    fn api_error_result(status: StatusCode, body: &str) -> SentimentResult {
        // Prefer the message the API itself reports, when the body is JSON.
        let error_msg = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|data| data["error"].as_str().map(str::to_string))
            .unwrap_or_else(|| format!("Erreur API: {}", status.as_u16()));

        warn!("Watson API returned {}: {}", status, error_msg);

        SentimentResult {
            sentiment: Sentiment::Error,
            score: 0.0,
            label: "❌ Erreur API".to_string(),
            confidence: 0.0,
            error: Some(error_msg),
            mode: None,
            raw_data: None,
        }
    }

    fn timeout_result() -> SentimentResult {
        SentimentResult {
            sentiment: Sentiment::Error,
            score: 0.0,
            label: "⏰ Timeout".to_string(),
            confidence: 0.0,
            error: Some("L'API Watson a mis trop de temps à répondre".to_string()),
            mode: None,
            raw_data: None,
        }
    }

    fn failure_result(detail: &str) -> SentimentResult {
        SentimentResult {
            sentiment: Sentiment::Error,
            score: 0.0,
            label: "❌ Erreur".to_string(),
            confidence: 0.0,
            error: Some(format!("Erreur inattendue: {}", detail)),
            mode: None,
            raw_data: None,
        }
    }
}

/// Display label ladder for positive documents.
fn positive_label(score: f64) -> &'static str {
    if score > 0.75 {
        "😊 Très positif"
    } else if score > 0.5 {
        "🙂 Positif"
    } else {
        "😌 Légèrement positif"
    }
}

/// Display label ladder for negative documents.
fn negative_label(score: f64) -> &'static str {
    if score < -0.75 {
        "😠 Très négatif"
    } else if score < -0.5 {
        "😞 Négatif"
    } else {
        "😕 Légèrement négatif"
    }
}

/// Confidence step table over the score magnitude. Applied to the
/// unrounded score; the service's own confidence field is ignored.
fn calculate_confidence(score: f64) -> f64 {
    let magnitude = score.abs();
    if magnitude > 0.7 {
        0.95
    } else if magnitude > 0.4 {
        0.80
    } else {
        0.60
    }
}

fn round3(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
