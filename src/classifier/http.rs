//! HTTP client for the classification service.
//!
//! Speaks plain JSON over HTTP:
//! - `POST {base_url}/predict` with `{"text": ...}`
//! - `GET {base_url}/` as a liveness probe

use async_trait::async_trait;
use log::{debug, info, warn};

use super::client::{Classifier, ClassifierError};
use super::types::{HealthResponse, PredictRequest, PredictionResult, RawPrediction};

pub struct HttpClassifier {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClassifier {
    /// `base_url` is the service root, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn predict(&self, text: &str) -> Result<PredictionResult, ClassifierError> {
        info!("POST {} ({} bytes of text)", self.predict_url(), text.len());

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(self.predict_url())
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        debug!("Classifier response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Classifier API error: {} - {}", status, err_body);
            return Err(ClassifierError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;
        debug!("Classifier response body: {}", body);

        let raw: RawPrediction =
            serde_json::from_str(&body).map_err(|e| ClassifierError::Parse(e.to_string()))?;

        Ok(raw.into())
    }

    async fn health(&self) -> Result<String, ClassifierError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(ClassifierError::Api {
                status,
                message: "health check failed".to_string(),
            });
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::Parse(e.to_string()))?;
        Ok(health.message)
    }
}
