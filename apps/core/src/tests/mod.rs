//! Test Module
//!
//! Cross-module test suites for the sentiment pipeline.
//!
//! ## Test Categories
//! - `watson_tests`: remote client behavior against a mock NLU server
//! - `pipeline_tests`: full validation → scoring → formatting workflows,
//!   configuration loading, and output serialization

pub mod pipeline_tests;
