//! Pipeline Integration Tests
//!
//! End-to-end workflows across configuration, validation, scoring, and
//! formatting, plus environment-driven construction and the shape of the
//! serialized output.

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::analyzer::{SentimentAnalyzer, DEMO_WARNING};
use crate::config::{AnalyzerConfig, WatsonCredentials};
use crate::error::AppError;
use crate::models::{ScoringMode, Sentiment};
use crate::validation::DEFAULT_MAX_LENGTH;

fn demo_analyzer() -> SentimentAnalyzer {
    SentimentAnalyzer::from_config(&AnalyzerConfig::default())
        .expect("demo config is always valid")
}

fn remote_config(url: String) -> AnalyzerConfig {
    AnalyzerConfig {
        credentials: Some(WatsonCredentials {
            api_key: "test-key".to_string(),
            url,
        }),
        ..AnalyzerConfig::default()
    }
}

// ============================================================================
// Strategy selection
// ============================================================================

#[test]
fn test_missing_credentials_select_heuristic_mode() {
    assert_eq!(demo_analyzer().mode(), ScoringMode::Heuristic);
}

#[test]
fn test_credentials_select_remote_mode() {
    let config = remote_config("https://api.example.com/v1/analyze".to_string());
    let analyzer = SentimentAnalyzer::from_config(&config).unwrap();

    assert_eq!(analyzer.mode(), ScoringMode::Remote);
}

#[test]
fn test_blank_api_key_is_rejected_at_construction() {
    let config = AnalyzerConfig {
        credentials: Some(WatsonCredentials {
            api_key: String::new(),
            url: "https://api.example.com".to_string(),
        }),
        ..AnalyzerConfig::default()
    };

    match SentimentAnalyzer::from_config(&config) {
        Err(AppError::Validation(_)) => {}
        other => panic!("expected a validation error, got {:?}", other.map(|_| ())),
    }
}

// ============================================================================
// Validation boundary
// ============================================================================

#[tokio::test]
async fn test_empty_text_is_a_validation_error() {
    match demo_analyzer().analyze("").await {
        Err(AppError::Validation(message)) => {
            assert_eq!(message, "Veuillez entrer un texte à analyser.");
        }
        other => panic!("expected a validation error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_oversized_text_reports_the_configured_limit() {
    let config = AnalyzerConfig {
        credentials: None,
        max_text_length: 10,
    };
    let analyzer = SentimentAnalyzer::from_config(&config).unwrap();

    match analyzer.analyze("un texte vraiment trop long").await {
        Err(AppError::Validation(message)) => assert!(message.contains("10")),
        other => panic!("expected a validation error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_dangerous_content_is_rejected() {
    let result = demo_analyzer().analyze("<script>alert(1)</script>").await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

// ============================================================================
// Heuristic workflow
// ============================================================================

#[tokio::test]
async fn test_heuristic_workflow_tags_mode_and_warning() {
    let formatted = demo_analyzer()
        .analyze("excellent super génial")
        .await
        .unwrap();

    assert_eq!(formatted.result.sentiment, Sentiment::Positive);
    assert_eq!(formatted.result.mode, Some(ScoringMode::Heuristic));
    assert_eq!(formatted.warning.as_deref(), Some(DEMO_WARNING));
    assert_eq!(formatted.css_class, "sentiment-positive");
    assert_eq!(formatted.sentiment_fr, "Positif");
    assert!(formatted.result.label.contains("(démo)"));
}

#[tokio::test]
async fn test_heuristic_output_serializes_flat() {
    let formatted = demo_analyzer()
        .analyze("excellent super génial")
        .await
        .unwrap();

    let value = serde_json::to_value(&formatted).unwrap();
    let object = value.as_object().expect("output must be a JSON object");

    // Result fields and presentation fields live at the same level.
    assert_eq!(object["sentiment"], "POSITIVE");
    assert_eq!(object["mode"], "heuristic");
    assert_eq!(object["warning"], "Mode démo - résultats simulés");
    for key in [
        "score",
        "label",
        "confidence",
        "css_class",
        "score_percent",
        "gauge_color",
        "sentiment_fr",
        "summary",
    ] {
        assert!(object.contains_key(key), "missing key '{}'", key);
    }
    // Heuristic results carry no remote diagnostics and no error.
    assert!(!object.contains_key("raw_data"));
    assert!(!object.contains_key("error"));
}

// ============================================================================
// Remote workflow
// ============================================================================

#[tokio::test]
async fn test_remote_workflow_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiment": { "document": { "score": 0.85, "label": "positive" } }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let analyzer = SentimentAnalyzer::from_config(&remote_config(mock_server.uri())).unwrap();
    let formatted = analyzer.analyze("Je suis très heureux !").await.unwrap();

    assert_eq!(formatted.result.sentiment, Sentiment::Positive);
    assert_eq!(formatted.result.mode, Some(ScoringMode::Remote));
    assert!(formatted.warning.is_none());
    assert_eq!(formatted.score_percent, "85.0%");
    assert_eq!(formatted.gauge_color, "success");
    assert_eq!(formatted.summary, "Sentiment positif (confiance: 95%)");
}

#[tokio::test]
async fn test_remote_failure_still_formats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let analyzer = SentimentAnalyzer::from_config(&remote_config(mock_server.uri())).unwrap();
    let formatted = analyzer.analyze("du texte").await.unwrap();

    assert_eq!(formatted.result.sentiment, Sentiment::Error);
    assert_eq!(formatted.result.mode, Some(ScoringMode::Remote));
    assert_eq!(formatted.css_class, "sentiment-error");
    assert_eq!(formatted.sentiment_fr, "Erreur");
    assert_eq!(formatted.summary, "Une erreur s'est produite lors de l'analyse.");
    assert_eq!(formatted.result.error.as_deref(), Some("Erreur API: 503"));
}

// ============================================================================
// Environment configuration
// ============================================================================

#[test]
fn test_from_env_selects_remote_mode() {
    temp_env::with_vars(
        [
            ("WATSON_API_KEY", Some("key")),
            ("WATSON_URL", Some("https://api.example.com/v1/analyze")),
            ("MAX_TEXT_LENGTH", None),
        ],
        || {
            let config = AnalyzerConfig::from_env().unwrap();

            assert!(config.watson_configured());
            assert_eq!(config.max_text_length, DEFAULT_MAX_LENGTH);
        },
    );
}

#[test]
fn test_from_env_without_credentials_selects_demo_mode() {
    temp_env::with_vars(
        [
            ("WATSON_API_KEY", None::<&str>),
            ("WATSON_URL", None),
            ("MAX_TEXT_LENGTH", None),
        ],
        || {
            let config = AnalyzerConfig::from_env().unwrap();

            assert!(!config.watson_configured());
        },
    );
}

#[test]
fn test_from_env_with_partial_credentials_selects_demo_mode() {
    temp_env::with_vars(
        [
            ("WATSON_API_KEY", Some("key")),
            ("WATSON_URL", None),
            ("MAX_TEXT_LENGTH", None),
        ],
        || {
            let config = AnalyzerConfig::from_env().unwrap();

            assert!(!config.watson_configured());
        },
    );
}

#[test]
fn test_from_env_reads_length_override() {
    temp_env::with_vars(
        [
            ("WATSON_API_KEY", None::<&str>),
            ("WATSON_URL", None),
            ("MAX_TEXT_LENGTH", Some("500")),
        ],
        || {
            let config = AnalyzerConfig::from_env().unwrap();

            assert_eq!(config.max_text_length, 500);
        },
    );
}

#[test]
fn test_from_env_rejects_bad_length_override() {
    temp_env::with_vars(
        [
            ("WATSON_API_KEY", None::<&str>),
            ("WATSON_URL", None),
            ("MAX_TEXT_LENGTH", Some("beaucoup")),
        ],
        || {
            assert!(matches!(
                AnalyzerConfig::from_env(),
                Err(AppError::Config(_))
            ));
        },
    );
}

#[test]
fn test_from_env_rejects_unparseable_url() {
    temp_env::with_vars(
        [
            ("WATSON_API_KEY", Some("key")),
            ("WATSON_URL", Some("pas une url")),
            ("MAX_TEXT_LENGTH", None),
        ],
        || {
            assert!(AnalyzerConfig::from_env().is_err());
        },
    );
}
