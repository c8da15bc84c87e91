//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::classifier::{Classifier, ClassifierError, PredictionResult};

/// A canned classifier for tests that don't need a real server.
pub struct StubClassifier {
    answer: Result<PredictionResult, ClassifierError>,
    pub calls: AtomicUsize,
}

impl StubClassifier {
    pub fn answering(result: PredictionResult) -> Self {
        Self {
            answer: Ok(result),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ClassifierError) -> Self {
        Self {
            answer: Err(error),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    fn endpoint(&self) -> &str {
        "stub://classifier"
    }

    async fn predict(&self, _text: &str) -> Result<PredictionResult, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }

    async fn health(&self) -> Result<String, ClassifierError> {
        Ok("stub is running".to_string())
    }
}

/// Creates a test App backed by a classifier that always fails.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubClassifier::failing(
        ClassifierError::Network("no server in tests".to_string()),
    )))
}
