use std::fmt;

use async_trait::async_trait;
use log::{info, warn};

use super::types::PredictionResult;

/// Errors that can occur while talking to the classification service.
///
/// Kept distinct for logging only. Callers of `classify_or_fallback` never see
/// them: every variant collapses to `PredictionResult::request_failed()`.
#[derive(Debug, Clone)]
pub enum ClassifierError {
    /// Transport failure (connection refused, DNS, reset).
    Network(String),
    /// Service answered with a non-success status.
    Api { status: u16, message: String },
    /// Body did not match the expected prediction shape.
    Parse(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierError::Network(msg) => write!(f, "network error: {msg}"),
            ClassifierError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ClassifierError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClassifierError {}

#[async_trait]
pub trait Classifier: Send + Sync {
    /// Human-readable endpoint, shown in the title bar.
    fn endpoint(&self) -> &str;

    /// Sends `text` to the service and returns the normalized prediction.
    async fn predict(&self, text: &str) -> Result<PredictionResult, ClassifierError>;

    /// Probes the service root and returns its greeting.
    async fn health(&self) -> Result<String, ClassifierError>;
}

/// Runs one prediction and folds every failure into the fixed error result.
///
/// Wraps both the network call and body parsing, so nothing escapes as an
/// unhandled error. Never retries.
pub async fn classify_or_fallback(classifier: &dyn Classifier, text: &str) -> PredictionResult {
    match classifier.predict(text).await {
        Ok(result) => {
            info!(
                "Prediction received: label={}, confidence={}",
                result.label, result.confidence
            );
            result
        }
        Err(e) => {
            warn!("Prediction request failed: {}", e);
            PredictionResult::request_failed()
        }
    }
}
