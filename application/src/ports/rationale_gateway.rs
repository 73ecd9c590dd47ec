//! Rationale gateway port
//!
//! Defines the interface for the text-generation service that
//! consolidates a question's per-option rationales into one paragraph.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use quizkey_domain::ConsolidationPrompt;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway to the rationale-consolidation service
///
/// Consumed once per question; the caller owns pacing and sequencing,
/// so implementations should issue exactly one request per call.
#[async_trait]
pub trait RationaleGateway: Send + Sync {
    /// Generate one consolidated rationale paragraph for a prompt.
    async fn consolidate(&self, prompt: &ConsolidationPrompt) -> Result<String, GatewayError>;
}
