//! # sentiment-core
//!
//! Core pipeline of the sentiment analysis application: maps free-form
//! text to a normalized, display-ready result, scored either by the
//! Watson NLU service or by a local keyword fallback when no credentials
//! are configured.
//!
//! The HTTP layer is an external collaborator: it calls
//! [`SentimentAnalyzer::analyze`] with a text string and serializes the
//! returned [`FormattedResult`] as-is.
//!
//! ## Components
//! - `validation`: input checks applied before any analysis
//! - `heuristic`: demo-mode keyword scorer
//! - `watson`: Watson NLU client
//! - `formatter`: presentation enrichment
//! - `analyzer`: pipeline facade and strategy selection
//! - `config`: environment-driven configuration
//! - `preflight`: configuration health report
//! - `telemetry`: tracing initialization for embedding binaries

pub mod analyzer;
pub mod config;
pub mod error;
pub mod formatter;
pub mod heuristic;
pub mod models;
pub mod preflight;
pub mod telemetry;
pub mod validation;
pub mod watson;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use analyzer::{ScoringStrategy, SentimentAnalyzer, DEMO_WARNING};
pub use config::{AnalyzerConfig, WatsonCredentials};
pub use error::AppError;
pub use formatter::format_result;
pub use heuristic::HeuristicScorer;
pub use models::{FormattedResult, ScoringMode, Sentiment, SentimentResult};
pub use preflight::{run_preflight_checks, CheckResult, PreflightReport};
pub use validation::{validate_text, Validation, DEFAULT_MAX_LENGTH};
pub use watson::WatsonClient;
