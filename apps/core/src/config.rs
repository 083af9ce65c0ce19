//! Environment-driven configuration.
//!
//! The deployment reads its settings from environment variables, optionally
//! loaded from a `.env` file. The presence of both Watson variables selects
//! remote mode; anything less falls back to the local demo scorer.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;
use url::Url;
use validator::Validate;

use crate::error::AppError;
use crate::validation::DEFAULT_MAX_LENGTH;

/// Credentials for the Watson NLU sentiment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WatsonCredentials {
    /// IBM Cloud API key, sent as a bearer token.
    #[validate(length(min = 1))]
    pub api_key: String,
    /// Full URL of the analysis endpoint.
    #[validate(length(min = 1))]
    pub url: String,
}

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Remote credentials; absent means demo mode.
    pub credentials: Option<WatsonCredentials>,
    /// Maximum accepted input length, in characters.
    pub max_text_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            max_text_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from the environment (and a `.env` file when present).
    ///
    /// Remote mode requires both `WATSON_API_KEY` and `WATSON_URL`; a
    /// partial pair is treated as unconfigured. `MAX_TEXT_LENGTH`
    /// optionally overrides the validation limit.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let api_key = env::var("WATSON_API_KEY").ok().filter(|v| !v.is_empty());
        let url = env::var("WATSON_URL").ok().filter(|v| !v.is_empty());

        let credentials = match (api_key, url) {
            (Some(api_key), Some(url)) => {
                // Fail fast on an endpoint that could never be reached.
                Url::parse(&url)?;
                Some(WatsonCredentials { api_key, url })
            }
            (None, None) => None,
            _ => {
                warn!("Configuration Watson incomplète (WATSON_API_KEY et WATSON_URL requis)");
                None
            }
        };

        if credentials.is_none() {
            warn!("Variables d'environnement Watson non configurées");
            warn!("Utilisation du mode démo (résultats simulés)");
        }

        let max_text_length = match env::var("MAX_TEXT_LENGTH") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| AppError::Config(format!("MAX_TEXT_LENGTH invalide: {}", e)))?,
            Err(_) => DEFAULT_MAX_LENGTH,
        };

        Ok(Self {
            credentials,
            max_text_length,
        })
    }

    /// True when remote credentials are configured.
    pub fn watson_configured(&self) -> bool {
        self.credentials.is_some()
    }
}
