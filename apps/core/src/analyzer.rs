//! Pipeline orchestration.
//!
//! Chooses the scoring strategy once from configuration, then runs each
//! request through validation, scoring, mode tagging, and display
//! formatting. Past validation the pipeline never fails: remote problems
//! arrive as `ERROR` results, already formatted.

use tracing::{info, warn};
use validator::Validate;

use crate::config::AnalyzerConfig;
use crate::error::AppError;
use crate::formatter::format_result;
use crate::heuristic::HeuristicScorer;
use crate::models::{FormattedResult, ScoringMode, SentimentResult};
use crate::validation::validate_text;
use crate::watson::WatsonClient;

/// Warning attached to every demo-mode result.
pub const DEMO_WARNING: &str = "Mode démo - résultats simulés";

/// How requests get scored, fixed once at construction.
pub enum ScoringStrategy {
    /// Delegate to the Watson NLU service.
    Remote(WatsonClient),
    /// Local keyword estimate, used without credentials.
    Heuristic(HeuristicScorer),
}

impl ScoringStrategy {
    /// Provenance tag for results produced by this strategy.
    pub fn mode(&self) -> ScoringMode {
        match self {
            ScoringStrategy::Remote(_) => ScoringMode::Remote,
            ScoringStrategy::Heuristic(_) => ScoringMode::Heuristic,
        }
    }

    async fn score(&self, text: &str) -> SentimentResult {
        match self {
            ScoringStrategy::Remote(client) => client.analyze(text).await,
            ScoringStrategy::Heuristic(scorer) => scorer.estimate(text),
        }
    }
}

/// Facade over the whole analysis pipeline.
pub struct SentimentAnalyzer {
    strategy: ScoringStrategy,
    max_text_length: usize,
}

impl SentimentAnalyzer {
    /// Build an analyzer from configuration.
    ///
    /// Remote mode requires well-formed credentials; without credentials
    /// the analyzer falls back to the demo scorer.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AppError> {
        let strategy = match &config.credentials {
            Some(credentials) => {
                credentials.validate()?;
                ScoringStrategy::Remote(WatsonClient::new(credentials))
            }
            None => ScoringStrategy::Heuristic(HeuristicScorer::new()),
        };

        Ok(Self {
            strategy,
            max_text_length: config.max_text_length,
        })
    }

    /// Scoring mode this analyzer was configured with.
    pub fn mode(&self) -> ScoringMode {
        self.strategy.mode()
    }

    /// Run `text` through the full pipeline.
    ///
    /// The only error is a validation failure, which the caller should
    /// surface as a client error with the embedded message.
    pub async fn analyze(&self, text: &str) -> Result<FormattedResult, AppError> {
        let validation = validate_text(text, self.max_text_length);
        if !validation.valid {
            warn!("Texte invalide: {}", validation.message);
            return Err(AppError::Validation(validation.message));
        }

        info!("Analyse de texte ({} caractères)", text.chars().count());

        let mut result = self.strategy.score(text).await;
        result.mode = Some(self.strategy.mode());

        let mut formatted = format_result(&result);
        if result.mode == Some(ScoringMode::Heuristic) {
            formatted.warning = Some(DEMO_WARNING.to_string());
        }

        info!(
            "Résultat: {} (score: {:.3})",
            formatted.sentiment_fr, formatted.result.score
        );

        Ok(formatted)
    }
}
