//! Preflight Check System
//!
//! Verifies the analyzer configuration before serving traffic and reports
//! the effective scoring mode. All checks are pure: no network or
//! filesystem access, so the report is safe to compute per health probe.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;
use validator::Validate;

use crate::config::AnalyzerConfig;
use crate::models::ScoringMode;

/// Result of a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CheckResult {
    fn pass(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.to_string(),
            details: None,
        }
    }

    fn fail(name: &str, message: &str, details: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
            details,
        }
    }
}

/// Complete preflight report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflightReport {
    pub all_passed: bool,
    pub checks: Vec<CheckResult>,
    pub watson_configured: bool,
    /// Mode an analyzer built from this configuration will run in.
    pub mode: ScoringMode,
    pub summary: String,
}

/// Run all configuration checks and produce a report.
pub fn run_preflight_checks(config: &AnalyzerConfig) -> PreflightReport {
    let checks = vec![
        check_credentials(config),
        check_endpoint(config),
        check_text_limit(config),
    ];

    let all_passed = checks.iter().all(|check| check.passed);
    let watson_configured = config.watson_configured();
    let mode = if watson_configured {
        ScoringMode::Remote
    } else {
        ScoringMode::Heuristic
    };

    let summary = if !all_passed {
        "Configuration errors detected.".to_string()
    } else if watson_configured {
        "All checks passed. Watson analysis configured.".to_string()
    } else {
        "All checks passed. Demo mode active (simulated results).".to_string()
    };

    if all_passed {
        info!("Preflight: {}", summary);
    } else {
        warn!("Preflight: {}", summary);
    }

    PreflightReport {
        all_passed,
        checks,
        watson_configured,
        mode,
        summary,
    }
}

fn check_credentials(config: &AnalyzerConfig) -> CheckResult {
    match &config.credentials {
        None => CheckResult::pass(
            "credentials",
            "Watson credentials not configured, demo scorer will be used",
        ),
        Some(credentials) => match credentials.validate() {
            Ok(()) => CheckResult::pass("credentials", "Watson credentials present"),
            Err(errors) => CheckResult::fail(
                "credentials",
                "Watson credentials are malformed",
                Some(errors.to_string()),
            ),
        },
    }
}

fn check_endpoint(config: &AnalyzerConfig) -> CheckResult {
    let Some(credentials) = &config.credentials else {
        return CheckResult::pass("endpoint_url", "Skipped - no credentials configured");
    };

    match Url::parse(&credentials.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            CheckResult::pass("endpoint_url", "Endpoint URL is well-formed")
        }
        Ok(url) => CheckResult::fail(
            "endpoint_url",
            "Endpoint URL has an unsupported scheme",
            Some(url.scheme().to_string()),
        ),
        Err(e) => CheckResult::fail(
            "endpoint_url",
            "Endpoint URL could not be parsed",
            Some(e.to_string()),
        ),
    }
}

fn check_text_limit(config: &AnalyzerConfig) -> CheckResult {
    if config.max_text_length == 0 {
        CheckResult::fail(
            "max_text_length",
            "Maximum text length of 0 rejects every input",
            None,
        )
    } else {
        CheckResult::pass(
            "max_text_length",
            &format!("Accepting up to {} characters", config.max_text_length),
        )
    }
}
